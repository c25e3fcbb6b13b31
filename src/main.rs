use catalog_search::core::ConfigProvider;
use catalog_search::utils::{logger, validation::Validate};
use catalog_search::{
    CliConfig, CodeExtractor, Command, HttpDocumentStore, ModelCatalog, ProductIdentifier,
    SearchEngine, TomlConfig, UnfilteredListings,
};
use clap::Parser;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting catalog-search");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => Box::new(TomlConfig::from_file(path)?),
        None => {
            cli.validate()?;
            Box::new(cli.clone())
        }
    };

    let store = HttpDocumentStore::new(settings.store_endpoint(), settings.request_timeout_secs())?;
    let extractor = if settings.noise_keywords().is_empty() {
        CodeExtractor::with_defaults()?
    } else {
        CodeExtractor::new(settings.noise_keywords())?
    };

    match run(&cli.command, store, extractor).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(
    command: &Command,
    store: HttpDocumentStore,
    extractor: CodeExtractor,
) -> catalog_search::Result<serde_json::Value> {
    match command {
        Command::Search { query } => {
            let engine = SearchEngine::new(store);
            Ok(serde_json::to_value(engine.search(query).await?)?)
        }
        Command::Similar { query } => {
            let engine = SearchEngine::new(store);
            Ok(serde_json::to_value(engine.search_similar(query).await?)?)
        }
        Command::Identify { name } => {
            let identifier =
                ProductIdentifier::new(ModelCatalog::new(store.clone()), store, extractor);
            Ok(serde_json::to_value(identifier.identify(name).await?)?)
        }
        Command::Match { name } => {
            let catalog = ModelCatalog::new(store);
            Ok(serde_json::to_value(catalog.match_model(name).await?)?)
        }
        Command::Summary => {
            let catalog = ModelCatalog::new(store.clone());
            let engine = SearchEngine::new(store.clone());
            let listings = UnfilteredListings::new(store);
            Ok(json!({
                "models": catalog.summary().await?,
                "products": engine.summary().await?,
                "unfilteredProducts": listings.summary().await?,
            }))
        }
    }
}
