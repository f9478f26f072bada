use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::str::FromStr;

/// Default payment API base URL used when `PAYMENT_API_BASE_URL` is not set.
pub const DEFAULT_PAYMENT_API_BASE_URL: &str = "https://api.stripe.com/v1";

/// Default MailerSend API base URL used when `MAILER_BASE_URL` is not set.
pub const DEFAULT_MAILER_BASE_URL: &str = "https://api.mailersend.com/v1";

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:8000,https://localhost:8000"
    )]
    pub allowed_origins: Vec<String>,

    /// The externally visible base URL of this site, used to build absolute
    /// redirect URLs handed to the payment provider (success/cancel pages).
    #[arg(long, env, default_value = "http://localhost:8000")]
    site_base_url: String,

    /// Directory holding the page templates loaded into the template store at startup.
    #[arg(long, env, default_value = "templates")]
    templates_dir: String,

    /// Directory holding static assets served under /static.
    #[arg(long, env, default_value = "static")]
    static_dir: String,

    /// The base URL of the payment provider's API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_PAYMENT_API_BASE_URL)]
    payment_api_base_url: String,
    /// The secret key to use when calling the payment provider's API.
    #[arg(long, env)]
    payment_secret_key: Option<String>,
    /// The payment provider price ID for the standard plan.
    #[arg(long, env)]
    standard_plan_price_id: Option<String>,
    /// The payment provider price ID for the premium plan.
    #[arg(long, env)]
    premium_plan_price_id: Option<String>,

    /// The base URL of the MailerSend API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_MAILER_BASE_URL)]
    mailer_base_url: String,
    /// The API key to use when calling the MailerSend API.
    #[arg(long, env)]
    mailer_api_key: Option<String>,
    /// The sender address for outgoing site email.
    #[arg(long, env, default_value = "hello@mytender.io")]
    mailer_from_email: String,
    /// The inbox notified when a trial signup lands.
    #[arg(long, env, default_value = "sales@mytender.io")]
    sales_notification_email: String,
    /// The link to the bid-writing guide sent to prospects who request it.
    #[arg(
        long,
        env,
        default_value = "https://mytender.io/static/guides/bid-writing-guide.pdf"
    )]
    guide_document_url: String,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 8000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the externally visible base URL of the site, without a trailing slash.
    pub fn site_base_url(&self) -> &str {
        self.site_base_url.trim_end_matches('/')
    }

    /// Returns the directory page templates are loaded from.
    pub fn templates_dir(&self) -> &str {
        &self.templates_dir
    }

    /// Returns the directory static assets are served from.
    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    /// Returns the payment provider API base URL.
    pub fn payment_api_base_url(&self) -> &str {
        &self.payment_api_base_url
    }

    /// Returns the payment provider secret key, if configured.
    pub fn payment_secret_key(&self) -> Option<String> {
        self.payment_secret_key.clone()
    }

    /// Returns the price ID for the standard plan, if configured.
    pub fn standard_plan_price_id(&self) -> Option<String> {
        self.standard_plan_price_id.clone()
    }

    /// Returns the price ID for the premium plan, if configured.
    pub fn premium_plan_price_id(&self) -> Option<String> {
        self.premium_plan_price_id.clone()
    }

    /// Returns the MailerSend API base URL.
    pub fn mailer_base_url(&self) -> &str {
        &self.mailer_base_url
    }

    /// Returns the MailerSend API key, if configured.
    pub fn mailer_api_key(&self) -> Option<String> {
        self.mailer_api_key.clone()
    }

    /// Returns the sender address for outgoing site email.
    pub fn mailer_from_email(&self) -> &str {
        &self.mailer_from_email
    }

    /// Returns the inbox notified about new trial signups.
    pub fn sales_notification_email(&self) -> &str {
        &self.sales_notification_email
    }

    /// Returns the link to the downloadable bid-writing guide.
    pub fn guide_document_url(&self) -> &str {
        &self.guide_document_url
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        // This could check an environment variable, or a config field
        self.runtime_env() == RustEnv::Production
    }
}
