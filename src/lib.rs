pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{AuthApiClient, ContentApiClient};
pub use core::compatibility::{estimate, estimate_by_name};
pub use core::matcher::MatchEngine;
pub use domain::model::{CompatibilityScore, PersonProfile};
pub use domain::session::Session;
pub use domain::zodiac::{Nakshatra, ZodiacSign};
pub use utils::error::{MilanError, Result};
