use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom_app=info,stockroom_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = stockroom_app::Config::load()?;
    tracing::info!("Starting stockroom with discount {}", config.catalog.discount);

    let stdout = std::io::stdout();
    stockroom_app::demo::run(&config, &mut stdout.lock())?;

    Ok(())
}
