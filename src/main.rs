use clap::Parser;
use tocbar::SidebarError;
use tocbar::cli::{Cli, run};

fn main() -> Result<(), SidebarError> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}
