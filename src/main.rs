use clap::Parser;
use village_organics::app::admin::{demo_customer, profile_orders, Dashboard};
use village_organics::app::render::{
    render_cart, render_dashboard, render_products, render_profile, OutputFormat,
};
use village_organics::domain::model::Product;
use village_organics::utils::error::ErrorSeverity;
use village_organics::utils::{logger, validation::Validate};
use village_organics::{
    CliConfig, Command, GeminiChat, InMemoryCatalog, Result, StoreConfig, Storefront,
};

fn load_config(cli: &CliConfig) -> Result<StoreConfig> {
    let config = match &cli.config {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn load_catalog(cli: &CliConfig, config: &StoreConfig) -> Result<InMemoryCatalog> {
    let path = cli
        .catalog
        .as_deref()
        .map(|p| p.to_string_lossy().into_owned())
        .or_else(|| config.catalog_path().map(str::to_string));

    match path {
        Some(path) => InMemoryCatalog::from_json_file(path),
        None => Ok(InMemoryCatalog::village_organics()),
    }
}

async fn run(cli: CliConfig, config: StoreConfig) -> Result<String> {
    let catalog = load_catalog(&cli, &config)?;
    let chat = GeminiChat::new(&config.chat)?;
    let store = Storefront::new(catalog, chat, config.delivery_fee());

    match cli.command {
        Command::Catalog {
            category,
            search,
            featured,
        } => {
            let products: Vec<&Product> = if featured {
                store.fresh_arrivals(config.store.featured_count).iter().collect()
            } else {
                store.browse(&category, &search)
            };
            render_products(&products, cli.format)
        }
        Command::Cart { intents } => {
            let (session, summary) = store.run_session(&intents)?;
            render_cart(session.cart(), &summary, cli.format)
        }
        Command::Chat { prompt, context } => {
            let reply = store.ask(&prompt, context.as_deref()).await;
            match cli.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "prompt": prompt,
                    "reply": reply,
                }))?),
                _ => Ok(format!("{}\n", reply)),
            }
        }
        Command::Profile { intents } => {
            let (_, summary) = store.run_session(&intents)?;
            render_profile(
                &demo_customer(),
                &profile_orders(),
                &summary.subscriptions,
                cli.format,
            )
        }
        Command::Admin => render_dashboard(&Dashboard::demo(), cli.format),
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();
    let config = load_config(&cli);

    let json_logs = config.as_ref().map(|c| c.logging.json).unwrap_or(false);
    if json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match config {
        Ok(config) => {
            tracing::info!("Starting {}", config.store.name);
            run(cli, config).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
