use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use tracing::{error, info};

use vkloot::cli::Cli;
use vkloot::vk::VkError;
use vkloot::{auth, config, downloader, models, vk};

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "vkloot=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(".", "vkloot.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(dir) = &cli.loot_dir {
        config.loot_dir = dir.clone();
    }
    if let Some(path) = &cli.settings {
        config.settings_path = path.clone();
    }
    config.validate()?;

    let credentials = auth::Credentials::acquire(&config.settings_path)?;

    let client = reqwest::Client::builder()
        .user_agent(&config.http.user_agent)
        .timeout(config.http_timeout())
        .build()?;

    info!("Searching for \"{}\"", cli.query);
    let docs = match vk::search_docs(
        &client,
        &config.api_base_url,
        &cli.query,
        &credentials.access_token,
    )
    .await
    {
        Ok(docs) => docs,
        Err(VkError::Authorization) => {
            error!(
                "Invalid user token. Try to get a new one: delete {} and restart.",
                config.settings_path.display()
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let mut docs = models::filter_by_ext(docs, &cli.ext);
    models::sort_by_add_date(&mut docs);

    for doc in &docs {
        println!("{}", doc);
    }
    println!("{}", models::SearchSummary::of(&docs));

    if cli.save {
        let started = Instant::now();
        info!(
            "Start downloading {} files with {} workers",
            docs.len(),
            cli.threads
        );
        let batch = downloader::run_downloads(&client, docs, cli.threads, &config.loot_dir).await;
        info!(
            "Finished in {:.2?}: {} saved, {} failed",
            started.elapsed(),
            batch.saved,
            batch.failed
        );
    }

    Ok(())
}
