use std::path::PathBuf;
use std::time::Instant;

use crate::adapters::raster::vertex_buffer::VertexBuffer;
use crate::controllers::explorer::{ExplorerConfig, ExplorerController, SessionError};
use crate::controllers::ports::snapshot_writer::SnapshotWriterPort;
use crate::core::actions::generate_transform::ports::random_source::RandomSource;

/// Generates one fractal without a window and writes a single snapshot.
pub struct SnapshotCliController<W: SnapshotWriterPort, R: RandomSource> {
    config: ExplorerConfig,
    writer: W,
    random: R,
}

impl<W: SnapshotWriterPort, R: RandomSource> SnapshotCliController<W, R> {
    pub fn new(config: ExplorerConfig, writer: W, random: R) -> Self {
        Self {
            config,
            writer,
            random,
        }
    }

    pub fn run(self) -> Result<PathBuf, SessionError> {
        let sink = VertexBuffer::with_limit(self.config.max_vertices);

        println!("Generating IFS fractal...");
        println!("Max depth: {}", self.config.ifs.max_depth);
        println!("Points: {}", self.config.ifs.expected_point_count());

        let start = Instant::now();
        let mut session = ExplorerController::new(self.config, sink, self.writer, self.random)?;
        println!("Generation: {:?}", start.elapsed());

        let start = Instant::now();
        let path = session.export_snapshot()?;
        println!("Export: {:?}", start.elapsed());
        println!("Saved to {}", path.display());

        Ok(path)
    }
}
