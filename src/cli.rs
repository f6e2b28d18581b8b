use sigreport::application::Cli;

fn main() -> anyhow::Result<()> {
    Cli::run()
}
