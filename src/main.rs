use logbook::commands::Cli;
use logbook::msg_error;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // A missing template ends up here as well and must exit non-zero.
    if let Err(e) = Cli::menu() {
        msg_error!(e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
