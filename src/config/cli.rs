use crate::config::toml_config::TomlConfig;
use crate::domain::model::{LoginRequest, PersonProfile, RegisterRequest};
use crate::domain::zodiac::{Nakshatra, ZodiacSign};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::validate_required_field;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "kundli-milan")]
#[command(about = "Moon-sign compatibility estimates and Kundli Milan readings")]
pub struct CliConfig {
    /// Path to a TOML configuration file (defaults to ./kundli-milan.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the content/AI service
    #[arg(long, env = "KUNDLI_CONTENT_API_URL", global = true)]
    pub content_api_url: Option<String>,

    /// Base URL of the authentication service
    #[arg(long, env = "KUNDLI_AUTH_API_URL", global = true)]
    pub auth_api_url: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the twelve rashis
    Signs,

    /// Estimate compatibility from two moon signs
    Score {
        sign1: String,
        sign2: String,
    },

    /// Estimate, then ask the content service for a full reading
    Match(MatchArgs),

    /// Log in and show the resulting session
    Login(CredentialArgs),

    /// Create an account
    Register(RegisterArgs),
}

#[derive(Debug, Clone, Args)]
pub struct MatchArgs {
    #[arg(long)]
    pub name1: String,
    #[arg(long)]
    pub moon1: ZodiacSign,
    #[arg(long, default_value = "Ashwini")]
    pub nakshatra1: Nakshatra,
    #[arg(long, default_value = "Simha")]
    pub ascendant1: ZodiacSign,

    #[arg(long)]
    pub name2: String,
    #[arg(long)]
    pub moon2: ZodiacSign,
    #[arg(long, default_value = "Rohini")]
    pub nakshatra2: Nakshatra,
    #[arg(long, default_value = "Kanya")]
    pub ascendant2: ZodiacSign,

    /// Log in with this email or username before asking for the reading
    #[arg(long)]
    pub identifier: Option<String>,

    #[arg(long, env = "KUNDLI_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct CredentialArgs {
    /// Email or username
    #[arg(long)]
    pub identifier: String,

    #[arg(long, env = "KUNDLI_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub username: String,
    #[arg(long, env = "KUNDLI_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long)]
    pub full_name: Option<String>,
}

impl CliConfig {
    /// File (or defaults) with command-line overrides applied on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = TomlConfig::load(self.config.as_deref())?;

        if let Some(url) = &self.content_api_url {
            tracing::debug!("🔧 content API overridden to {}", url);
            config.content_api.base_url = url.clone();
        }
        if let Some(url) = &self.auth_api_url {
            tracing::debug!("🔧 auth API overridden to {}", url);
            config.auth_api.base_url = url.clone();
        }

        Ok(config)
    }

    pub fn log_format(&self, config: &TomlConfig) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            config.log_format()
        }
    }
}

impl MatchArgs {
    pub fn profiles(&self) -> (PersonProfile, PersonProfile) {
        (
            PersonProfile {
                name: self.name1.clone(),
                moon_sign: self.moon1,
                nakshatra: self.nakshatra1,
                ascendant_rashi: self.ascendant1,
            },
            PersonProfile {
                name: self.name2.clone(),
                moon_sign: self.moon2,
                nakshatra: self.nakshatra2,
                ascendant_rashi: self.ascendant2,
            },
        )
    }

    /// `None` when no identifier was given; a password is then required.
    pub fn login_request(&self) -> Result<Option<LoginRequest>> {
        match &self.identifier {
            None => Ok(None),
            Some(identifier) => {
                let password = validate_required_field("password", &self.password)?;
                Ok(Some(LoginRequest {
                    identifier: identifier.clone(),
                    password: password.clone(),
                }))
            }
        }
    }
}

impl From<&CredentialArgs> for LoginRequest {
    fn from(args: &CredentialArgs) -> Self {
        LoginRequest {
            identifier: args.identifier.clone(),
            password: args.password.clone(),
        }
    }
}

impl From<&RegisterArgs> for RegisterRequest {
    fn from(args: &RegisterArgs) -> Self {
        RegisterRequest {
            email: args.email.clone(),
            username: args.username.clone(),
            password: args.password.clone(),
            full_name: args.full_name.clone(),
        }
    }
}
