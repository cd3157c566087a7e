//! Terminal client entry point.
mod app;
mod input;
mod presentation;
mod state;

use anyhow::Result;
use mailstorm_content::MessageCatalog;
use mailstorm_core::DeliverySchedule;
use mailstorm_runtime::Runtime;

use app::App;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = MessageCatalog::embedded()?;
    let pool_size = DeliverySchedule::generate(mailstorm_core::MatchConfig::default().total_time)
        .len()
        .max(catalog.len());

    let runtime = Runtime::builder()
        .messages(catalog.deal(pool_size))
        .build()
        .await?;

    App::new(runtime).run().await
}
