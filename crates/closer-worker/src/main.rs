use anyhow::Context;
use closer_analyst::{CampaignCycle, NoAnalysis, ProspectQualifier, SalesBibleBuilder, Worker};
use closer_config::CloserConfig;
use closer_llm::GeminiClient;
use closer_store::RestStore;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("closer error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let config = CloserConfig::load_with_dotenv()
        .and_then(CloserConfig::validated)
        .context("invalid configuration")?;

    let store = RestStore::new(&config.store).context("failed to build store client")?;
    let generator =
        GeminiClient::new(&config.generation).context("failed to build generation client")?;
    tracing::info!(
        model = generator.model(),
        interval_secs = config.worker.interval_secs,
        batch_size = config.worker.batch_size,
        "analyst worker starting"
    );

    let worker = Worker::new(
        CampaignCycle::new(
            &store,
            SalesBibleBuilder::new(&store, &generator, config.worker.objection_count),
            ProspectQualifier::new(&store, &NoAnalysis, config.worker.batch_size)
                .with_pause(config.worker.qualify_pause()),
        ),
        config.worker.interval(),
    );

    worker.run(None).await;
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CLOSER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
