use anyhow::{Context, Result};
use clap::Parser;
use client_core::{CountryClient, ViewSession};
use shared::{domain::NameField, filter::CurrencyCategory};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod prompt;
mod render;

use config::{load_settings, Settings, SETTINGS_FILE};

#[derive(Parser, Debug)]
#[command(about = "Browse and filter the public country directory")]
struct Args {
    /// Base url of the restcountries v3.1 API.
    #[arg(long)]
    api_url: Option<String>,
    /// Case-insensitive substring of the displayed country name.
    #[arg(long, short)]
    query: Option<String>,
    #[arg(long, short)]
    region: Option<String>,
    /// none, euro, dollar or pound.
    #[arg(long, short)]
    currency: Option<CurrencyCategory>,
    /// Translation language for names, e.g. fra or deu.
    #[arg(long, conflicts_with = "common_names")]
    name_lang: Option<String>,
    /// Show and search the English common names.
    #[arg(long)]
    common_names: bool,
    /// List the distinct regions and exit.
    #[arg(long)]
    regions: bool,
    /// Print the matching records as JSON.
    #[arg(long, conflicts_with = "interactive")]
    json: bool,
    /// Keep editing filters at a prompt.
    #[arg(long, short)]
    interactive: bool,
}

impl Args {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(api_url) = &self.api_url {
            settings.api_url = api_url.clone();
        }
        if let Some(language) = &self.name_lang {
            settings.name_language = Some(language.clone());
        }
        if self.common_names {
            settings.name_language = None;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = load_settings();
    let mut settings = loaded.settings;
    args.apply_to(&mut settings);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(err) = loaded.file_error {
        warn!(%err, file = SETTINGS_FILE, "ignoring unreadable settings file");
    }

    let client = CountryClient::new(&settings.api_url).context("invalid api url")?;
    let name_field: NameField = settings.name_field();

    eprintln!("Loading countries...");
    let mut session =
        match ViewSession::load(&client, name_field, settings.demonym_language.clone()).await {
            Ok(session) => session,
            Err(err) => {
                error!(%err, "country load failed");
                eprintln!("Countries could not be loaded.");
                return Err(err).context("failed to load countries");
            }
        };
    info!(count = session.len(), api_url = %settings.api_url, "view session ready");

    if args.regions {
        render::print_regions(&session);
        return Ok(());
    }

    if let Some(query) = args.query {
        session.set_query(query);
    }
    session.set_region(args.region);
    session.set_currency(args.currency.unwrap_or(CurrencyCategory::None));

    if args.interactive {
        prompt::run(&mut session)?;
    } else if args.json {
        render::print_json(&session)?;
    } else {
        render::print_cards(&session);
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
