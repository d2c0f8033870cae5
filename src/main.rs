use clap::Parser;
use seq_fetch::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level.as_filter()))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::run(&cli)
}
