mod config;

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use almanac_commands::{Reply, dispatch};
use almanac_core::{Context, Data};
use almanac_llm::GenerationClient;

use crate::config::{AppConfig, build_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter_fn(|metadata| {
            let target = metadata.target();

            let within_info_level = *metadata.level() <= tracing::Level::INFO;
            if !within_info_level {
                return false;
            }

            !(target.starts_with("hyper") || target.starts_with("reqwest"))
        }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let store = build_store(&config).await;

    let data = match config.endpoint.as_deref() {
        Some(endpoint) => {
            info!(%endpoint, "Using custom chat completion endpoint.");
            let client = GenerationClient::new(store.clone()).with_endpoint(endpoint);
            Data::with_client(store, client)
        }
        None => Data::new(store),
    };
    let mut session = data.session();

    println!("Almanac is ready. Ask a question, or type /help.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let mut ctx = Context {
            data: &data,
            session: &mut session,
        };

        match dispatch(&mut ctx, &line).await {
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Silent) => {}
            Ok(Reply::Quit) => break,
            Err(error) => on_error(error),
        }
    }

    info!("Almanac is shutting down.");
    Ok(())
}

fn on_error(error: anyhow::Error) {
    error!(?error, "command error");
    println!("Something went wrong while running this command.");
}
