use clap::Parser;
use sift::cli::commands::Cli;
use sift::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand: launch the TUI panel
            let vault = cli.vault.clone();
            if let Err(e) = sift::tui::run(vault.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
