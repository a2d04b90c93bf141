pub mod compatibility;
pub mod matcher;

pub use crate::domain::model::{CompatibilityReading, CompatibilityScore, MatchReport, PersonProfile};
pub use crate::domain::ports::{AuthService, ConfigProvider, InterpretationService};
pub use crate::domain::session::Session;
pub use crate::utils::error::Result;
