use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

mod domain;
mod application;
mod infrastructure;

use application::errors::{ConfigError, ServerError};
use application::messaging::IntentDetector;
use application::services::{ChatService, PaymentService, WalletService};
use infrastructure::config::Config;
use infrastructure::http::{self, AppState};
use infrastructure::llm::AimlProvider;
use infrastructure::storage::MemorySessionStore;
use infrastructure::wallet;

#[derive(Parser)]
#[command(name = "rentbot")]
#[command(about = "Rent assistant chat backend with simulated USDC payments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "rentbot.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    #[command(alias = "run")]
    Serve {
        /// Listening port (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run payment intent detection on a message and print the result
    Detect {
        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "rentbot.yaml")]
        path: PathBuf,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => run_server(&cli.config, port),
        Commands::Detect { message } => detect(&cli.config, &message.join(" ")),
        Commands::Version => {
            println!("rentbot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig { path } => init_config(&path),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// File config when present, environment on top
fn load_config(config_path: &str) -> Result<Config, ServerError> {
    let config = if Path::new(config_path).exists() {
        match Config::load(config_path) {
            Ok(config) => config.apply_env()?,
            Err(e) => {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()?
            }
        }
    } else {
        Config::load_env()?
    };
    Ok(config)
}

fn run_server(config_path: &str, port_override: Option<u16>) -> Result<(), ServerError> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port_override {
        config.server.port = port;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let state = build_state(&config).await?;
        let router = http::router(state, &config.server.static_dir);

        tracing::info!("Open your browser and go to: http://localhost:{}", config.server.port);
        http::serve(router, &config.server.bind_address()).await
    })
}

async fn build_state(config: &Config) -> Result<AppState, ServerError> {
    if !config.llm.has_api_key() {
        tracing::warn!("AIML_API_KEY is not set, chat requests will fail");
    }
    let llm = AimlProvider::from_config(&config.llm).map_err(|e| ServerError::Client(e.to_string()))?;
    tracing::info!("Chat completions via {} ({})", config.llm.base_url, config.llm.model);

    let provider = wallet::select_provider(&config.wallet);
    let directory = wallet::resolve_directory(provider.as_ref()).await;

    let store = Arc::new(MemorySessionStore::new(config.session.history_limit));
    tracing::info!("Session history capped at {} messages", store.history_limit());
    let chat = ChatService::new(Arc::new(llm), store, config.tenant.clone())
        .with_policy(config.session.on_failure)
        .with_sampling(config.llm.temperature, config.llm.max_tokens);

    let payments = PaymentService::new(
        directory.clone(),
        provider.is_live(),
        Duration::from_millis(config.payment.delay_ms),
    );
    let wallets = WalletService::new(provider, directory);

    Ok(AppState {
        chat: Arc::new(chat),
        payments: Arc::new(payments),
        wallets: Arc::new(wallets),
        default_session_id: Arc::from(config.session.default_session_id.as_str()),
    })
}

fn detect(config_path: &str, message: &str) -> Result<(), ServerError> {
    let config = load_config(config_path)?;
    let result = IntentDetector::new(config.tenant.monthly_rent).detect(message);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn init_config(path: &Path) -> Result<(), ServerError> {
    if path.exists() {
        return Err(ConfigError::InvalidValue(format!("{} already exists", path.display())).into());
    }
    let yaml = Config::default().to_yaml()?;

    std::fs::write(path, yaml)?;
    println!("Created {}", path.display());
    Ok(())
}
