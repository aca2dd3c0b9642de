//! starscan CLI - browse the starred repositories of a GitHub user

use clap::Parser;

mod cli;

use cli::{Cli, Commands, GlobalOptions};
use starscan::error::Result;
use starscan::logging;

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);

    let level = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    logging::init(level, opts.debug);

    match cli.command {
        Commands::Serve { host, port } => cli::serve::run(host, port, &opts).await,
        Commands::Scan { username, view } => cli::scan::run(&username, &view, &opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("starscan version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
