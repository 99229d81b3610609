use std::env;
use std::process::ExitCode;

use poketrade::config::TAB_VAR;
use poketrade::{PokeTrade, Tab};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poketrade=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "poketrade failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> poketrade::Result<String> {
    let tab = match env::var(TAB_VAR) {
        Ok(v) => v.parse::<Tab>()?,
        Err(_) => Tab::default(),
    };

    let client = PokeTrade::builder().from_env()?.build()?;
    tracing::info!(%client, %tab, "rendering page");

    Ok(client.render_page(tab))
}
