fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let command = ifs_explorer::RunGuiCommand::new(ifs_explorer::ExplorerConfig::default());

    command.execute()
}
