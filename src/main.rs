//! CLI entry point for the path illustration generator

use clap::Parser;
use mazepaper::io::cli::{BatchRunner, Cli};

fn main() -> mazepaper::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();
    let mut runner = BatchRunner::new(cli);
    runner.process()
}
