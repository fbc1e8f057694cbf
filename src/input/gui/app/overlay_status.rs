use crate::controllers::explorer::errors::session_error::SessionError;
use crate::controllers::explorer::events::session_event::SessionEvent;

/// Last action outcome shown in the overlay.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverlayStatus {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl OverlayStatus {
    /// A success replaces the message and clears the error; a failure only
    /// sets the error so the previous message stays visible.
    pub fn record(&mut self, outcome: &Result<Option<SessionEvent>, SessionError>) {
        match outcome {
            Ok(Some(SessionEvent::Regenerated {
                point_count,
                duration,
            })) => {
                self.message = Some(format!(
                    "Regenerated {} points in {} ms",
                    point_count,
                    duration.as_millis()
                ));
                self.error = None;
            }
            Ok(Some(SessionEvent::Exported { path, duration })) => {
                self.message = Some(format!(
                    "Exported {} in {} ms",
                    path.display(),
                    duration.as_millis()
                ));
                self.error = None;
            }
            Ok(None) => {}
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}
