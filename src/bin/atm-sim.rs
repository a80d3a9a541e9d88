use anyhow::Result;
use atm_sim::{bin_utils::Service, cli, processor::session_processor::SessionProcessor};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let args = cli::parse_args();
    init_tracing();

    let service = Service {
        input: std::io::stdin().lock(),
        output: &mut std::io::stdout(),
        processor: SessionProcessor::new(args.open_account()),
    };
    service.run()?;
    Ok(())
}

/// Logs go to stderr so they never mix with the menu.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(cli::log_filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
