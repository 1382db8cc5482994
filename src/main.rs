//! AlsaRec CLI entry point

use std::process::ExitCode;

use clap::Parser;

use alsa_rec::cli::{
    app::{run_list, run_record, run_version, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use alsa_rec::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut presenter = Presenter::new();

    match cli.command {
        Commands::List => run_list(&presenter).await,
        Commands::Version => run_version(&presenter).await,
        Commands::Record(args) => run_record(args, &mut presenter).await,
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
    }
}
