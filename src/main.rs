use clap::{Parser, Subcommand};
use clap::builder::BoolishValueParser;
use psych_eval::config::{AppConfig, ConfigError, ConfigOverrides};
use psych_eval::net::api::{ApiClient, ApiError};
use psych_eval::net::types::Credentials;
use psych_eval::router::table::routes;
use psych_eval::router::{NavigationError, Navigator};
use psych_eval::state::session::Session;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "psych-eval", about = "Psych-eval route guard and auth client")]
struct Cli {
    #[arg(long, env = "PSYCH_EVAL_API_BASE_URL")]
    api_base_url: Option<String>,

    #[arg(long, env = "PSYCH_EVAL_WITH_CREDENTIALS", value_parser = BoolishValueParser::new())]
    with_credentials: Option<bool>,

    #[arg(long, env = "PSYCH_EVAL_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_base_url: self.api_base_url.clone(),
            with_credentials: self.with_credentials,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the route table.
    Routes,
    /// Resolve one navigation and print where it lands.
    Navigate {
        url: String,
        /// Treat the session as logged in with this token.
        #[arg(long, env = "PSYCH_EVAL_TOKEN")]
        token: Option<String>,
    },
    /// Create an account on the backend.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in, then continue to the requested page.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "/")]
        redirect: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?.with_overrides(cli.overrides());

    match cli.command {
        Command::Routes => run_routes(),
        Command::Navigate { url, token } => run_navigate(&url, token),
        Command::Register { email, password } => run_register(&config, Credentials { email, password }).await,
        Command::Login { email, password, redirect } => {
            run_login(&config, Credentials { email, password }, &redirect).await
        }
    }
}

fn run_routes() -> Result<(), CliError> {
    let table: Vec<Value> = routes()
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "path": r.path,
                "policy": r.policy,
                "props": r.props.is_some(),
            })
        })
        .collect();
    print_json(&Value::Array(table))
}

fn run_navigate(url: &str, token: Option<String>) -> Result<(), CliError> {
    let mut session = Session::new();
    if let Some(token) = token {
        session.set_token(token);
    }
    let navigation = Navigator::new().navigate(&session, url)?;
    print_json(&serde_json::to_value(navigation)?)
}

async fn run_register(config: &AppConfig, credentials: Credentials) -> Result<(), CliError> {
    let client = ApiClient::new(config)?;
    let message = client.register(&credentials).await?;
    print_json(&serde_json::json!({ "message": message }))
}

async fn run_login(config: &AppConfig, credentials: Credentials, redirect: &str) -> Result<(), CliError> {
    let client = ApiClient::new(config)?;
    let mut session = Session::new();
    let mut navigator = Navigator::new();

    // Anonymous first: protected targets bounce to Login and remember the way back.
    let landing = navigator.navigate(&session, redirect)?;
    tracing::debug!(route = landing.route.as_str(), "pre-login landing");

    client.login_session(&mut session, &credentials).await?;
    let navigation = navigator.resume_after_login(&session)?;
    print_json(&serde_json::json!({
        "user": session.user(),
        "navigation": navigation,
    }))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
