use clap::Parser;

use vitalrisk_lib::cli::{run, Cli};

fn main() {
    vitalrisk_lib::init_tracing();

    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = run(cli, stdin.lock(), stdout.lock()) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
