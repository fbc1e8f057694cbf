use ifs_explorer::{ExplorerConfig, PngFilePresenter, RngRandomSource, SnapshotCliController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let controller = SnapshotCliController::new(
        ExplorerConfig::default(),
        PngFilePresenter::new(),
        RngRandomSource::from_entropy(),
    );

    controller.run()?;

    Ok(())
}
