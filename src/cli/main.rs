mod common;

use clap::{parser::ValueSource, Arg, ArgMatches, Command};
use dotenv::dotenv;
use std::process::exit;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_probe::{
    config::{DEFAULT_API_URL, DEFAULT_ENDPOINT},
    ApiConfig, HttpTransport, RequestInvoker,
};

use crate::common::ConsoleHandler;

fn cli() -> Command {
    Command::new("user-probe")
        .about("Send the example registration payload to the user API and print the reply")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .short('u')
                .help("Optional: scheme, host and port of the API. Falls back to $API_URL.")
                .required(false)
                .default_value(DEFAULT_API_URL),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .help("Optional: path appended to the base URL. Falls back to $API_ENDPOINT.")
                .required(false)
                .default_value(DEFAULT_ENDPOINT),
        )
}

// Only values typed on the command line beat the environment.
fn cli_value(matches: &ArgMatches, id: &str) -> Option<String> {
    match matches.value_source(id) {
        Some(ValueSource::CommandLine) => matches.get_one::<String>(id).cloned(),
        _ => None,
    }
}

fn config_from(matches: &ArgMatches) -> ApiConfig {
    ApiConfig::from_env().with_overrides(
        cli_value(matches, "base-url"),
        cli_value(matches, "endpoint"),
    )
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_probe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = cli().get_matches();
    let config = config_from(&matches);
    tracing::info!("sending registration to {}", config.url());

    let invoker = RequestInvoker::new(config, HttpTransport::new());
    if !invoker.run(&mut ConsoleHandler::stdio()).await {
        exit(1);
    }
}
