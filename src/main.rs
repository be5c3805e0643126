use anyhow::Context as _;
use clap::Parser;
use hostlookup::base::config::LookupConfig;
use hostlookup::console::Console;
use hostlookup::dispatcher::Dispatcher;
use hostlookup::dns::{GaiResolver, NameResolutionService, ResolverRuntime};
use hostlookup::input::InputHandler;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hostlookup")]
#[command(version)]
#[command(about = "Resolve domain names and IPv4 addresses with the system resolver")]
struct Cli {
    /// Log level
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    log_level: String,

    /// Largest number of domains accepted in one batch
    #[arg(long, value_name = "N", default_value_t = LookupConfig::default().max_batch_domains)]
    max_batch: usize,
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let runtime = ResolverRuntime::acquire().context("resolver initialization failed")?;

    let config = LookupConfig::default().with_max_batch_domains(cli.max_batch);
    let dispatcher = Dispatcher::new(
        NameResolutionService::new(GaiResolver::new(&runtime)),
        InputHandler::new(&config),
    );

    // Console failures end the session but, like lookup failures, are not fatal.
    if let Err(err) = dispatcher.run(&mut Console::stdio()) {
        tracing::warn!(error = %err, "session ended early");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
