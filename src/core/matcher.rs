use crate::core::compatibility;
use crate::domain::model::{CompatibilityRequest, CompatibilityScore, MatchReport, PersonProfile};
use crate::domain::ports::InterpretationService;
use crate::domain::session::Session;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

/// Checks the profiles before anything goes over the network.
pub fn validate_profiles(person1: &PersonProfile, person2: &PersonProfile) -> Result<()> {
    // 兩個名字都必須填寫
    validate_non_empty_string("person1.name", &person1.name)?;
    validate_non_empty_string("person2.name", &person2.name)
}

pub struct MatchEngine<S: InterpretationService> {
    service: S,
}

impl<S: InterpretationService> MatchEngine<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Local estimate from the two moon signs; no network.
    pub fn estimate(&self, person1: &PersonProfile, person2: &PersonProfile) -> CompatibilityScore {
        compatibility::estimate(person1.moon_sign, person2.moon_sign)
    }

    pub async fn analyze(
        &self,
        session: &Session,
        person1: &PersonProfile,
        person2: &PersonProfile,
    ) -> Result<MatchReport> {
        validate_profiles(person1, person2)?;

        let score = self.estimate(person1, person2);
        tracing::info!(
            "💞 {} ({}) · {} ({}): {} [{}%]",
            person1.name,
            person1.moon_sign,
            person2.name,
            person2.moon_sign,
            score,
            score.percentage()
        );

        let request = CompatibilityRequest {
            person1: person1.clone(),
            person2: person2.clone(),
            score,
        };

        tracing::debug!("Requesting reading (authenticated: {})", session.is_authenticated());
        let reading = self.service.compatibility_reading(session, &request).await?;

        if reading.verdict().is_none() && !reading.verdict.is_empty() {
            tracing::warn!("Unrecognised verdict from content service: {}", reading.verdict);
        }

        Ok(MatchReport {
            person1: request.person1,
            person2: request.person2,
            score,
            reading,
        })
    }
}
