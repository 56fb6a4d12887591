use color_eyre::eyre::Result;
use dotenv::dotenv;
use openhours_api::config::ApiConfig;
use openhours_core::query::QueryService;
use openhours_ingest::load_schedule;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize tracing for logging before ingestion starts
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Ingest and parse the restaurant hours data before serving
    let schedule = load_schedule(&config.data_file)?;
    let query = QueryService::new(schedule);

    // Start API server
    openhours_api::start_server(config, query).await?;

    Ok(())
}
