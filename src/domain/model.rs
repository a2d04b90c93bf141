use crate::domain::zodiac::{Nakshatra, ZodiacSign};
use crate::utils::error::{MilanError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Ashtakoota points, 0..=36.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CompatibilityScore(u8);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Recommendation {
    Excellent,
    Good,
    Average,
    Challenging,
}

impl CompatibilityScore {
    pub const MAX: u8 = 36;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(MilanError::InvalidScore {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// For table lookups whose values are known to be in range.
    pub(crate) fn from_table(value: u8) -> Self {
        debug_assert!(value <= Self::MAX);
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Share of the 36-point maximum, rounded to the nearest whole percent.
    pub fn percentage(self) -> u8 {
        ((self.0 as f64 / Self::MAX as f64) * 100.0).round() as u8
    }

    pub fn recommendation(self) -> Recommendation {
        match self.0 {
            30.. => Recommendation::Excellent,
            24..=29 => Recommendation::Good,
            18..=23 => Recommendation::Average,
            _ => Recommendation::Challenging,
        }
    }
}

impl TryFrom<u8> for CompatibilityScore {
    type Error = MilanError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CompatibilityScore> for u8 {
    fn from(score: CompatibilityScore) -> u8 {
        score.0
    }
}

impl fmt::Display for CompatibilityScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub name: String,
    pub moon_sign: ZodiacSign,
    pub nakshatra: Nakshatra,
    pub ascendant_rashi: ZodiacSign,
}

/// Body of `POST /api/v1/ai/compatibility`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    pub person1: PersonProfile,
    pub person2: PersonProfile,
    pub score: CompatibilityScore,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompatibilityEnvelope {
    #[serde(default)]
    pub success: bool,
    pub score: Option<u8>,
    pub reading: CompatibilityReading,
}

// 生成的 JSON 常以 null 代替缺少的欄位
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remedy {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Free-form reading from the content service. Missing or null fields fall back to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityReading {
    #[serde(deserialize_with = "null_as_default")]
    pub overall: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emotional: String,
    #[serde(deserialize_with = "null_as_default")]
    pub physical: String,
    #[serde(deserialize_with = "null_as_default")]
    pub intellectual: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spiritual: String,
    #[serde(deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub nurture: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub life_together: String,
    #[serde(deserialize_with = "null_as_default")]
    pub remedies: Vec<Remedy>,
    pub auspicious_timing: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub verdict: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verdict_detail: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    HighlyCompatible,
    Compatible,
    ModeratelyCompatible,
    NeedsWork,
}

impl Verdict {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Highly Compatible" => Some(Verdict::HighlyCompatible),
            "Compatible" => Some(Verdict::Compatible),
            "Moderately Compatible" => Some(Verdict::ModeratelyCompatible),
            "Needs Work" => Some(Verdict::NeedsWork),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::HighlyCompatible => "Highly Compatible",
            Verdict::Compatible => "Compatible",
            Verdict::ModeratelyCompatible => "Moderately Compatible",
            Verdict::NeedsWork => "Needs Work",
        }
    }
}

impl CompatibilityReading {
    /// `None` when the service answered with a verdict outside the known four.
    pub fn verdict(&self) -> Option<Verdict> {
        Verdict::parse(&self.verdict)
    }
}

/// Score plus interpretation for one couple.
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub person1: PersonProfile,
    pub person2: PersonProfile,
    pub score: CompatibilityScore,
    pub reading: CompatibilityReading,
}

impl MatchReport {
    pub fn percentage(&self) -> u8 {
        self.score.percentage()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_verified: bool,
}

/// Login / register response from the auth API.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

/// Refresh response: new tokens, no user.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert!(CompatibilityScore::new(0).is_ok());
        assert!(CompatibilityScore::new(36).is_ok());
        assert!(matches!(
            CompatibilityScore::new(37),
            Err(MilanError::InvalidScore { value: 37, max: 36 })
        ));
    }

    #[test]
    fn test_score_percentage() {
        assert_eq!(CompatibilityScore::new(28).unwrap().percentage(), 78);
        assert_eq!(CompatibilityScore::new(15).unwrap().percentage(), 42);
        assert_eq!(CompatibilityScore::new(18).unwrap().percentage(), 50);
        assert_eq!(CompatibilityScore::new(36).unwrap().percentage(), 100);
        assert_eq!(CompatibilityScore::new(0).unwrap().percentage(), 0);
    }

    #[test]
    fn test_score_recommendation_bands() {
        let band = |v| CompatibilityScore::new(v).unwrap().recommendation();
        assert_eq!(band(36), Recommendation::Excellent);
        assert_eq!(band(30), Recommendation::Excellent);
        assert_eq!(band(28), Recommendation::Good);
        assert_eq!(band(24), Recommendation::Good);
        assert_eq!(band(22), Recommendation::Average);
        assert_eq!(band(18), Recommendation::Average);
        assert_eq!(band(15), Recommendation::Challenging);
    }

    #[test]
    fn test_score_serde_rejects_out_of_range() {
        let score: CompatibilityScore = serde_json::from_str("25").unwrap();
        assert_eq!(score.value(), 25);
        assert_eq!(serde_json::to_string(&score).unwrap(), "25");
        assert!(serde_json::from_str::<CompatibilityScore>("40").is_err());
    }

    #[test]
    fn test_request_payload_shape() {
        let request = CompatibilityRequest {
            person1: PersonProfile {
                name: "Arjun".to_string(),
                moon_sign: ZodiacSign::Mesha,
                nakshatra: Nakshatra::Ashwini,
                ascendant_rashi: ZodiacSign::Simha,
            },
            person2: PersonProfile {
                name: "Meera".to_string(),
                moon_sign: ZodiacSign::Vrishabha,
                nakshatra: Nakshatra::Rohini,
                ascendant_rashi: ZodiacSign::Kanya,
            },
            score: CompatibilityScore::new(18).unwrap(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "person1": {"name": "Arjun", "moon_sign": "Mesha", "nakshatra": "Ashwini", "ascendant_rashi": "Simha"},
                "person2": {"name": "Meera", "moon_sign": "Vrishabha", "nakshatra": "Rohini", "ascendant_rashi": "Kanya"},
                "score": 18
            })
        );
    }

    #[test]
    fn test_partial_reading_deserializes() {
        let reading: CompatibilityReading = serde_json::from_value(serde_json::json!({
            "overall": "A balanced pairing",
            "strengths": ["Shared values"],
            "verdict": "Compatible"
        }))
        .unwrap();

        assert_eq!(reading.overall, "A balanced pairing");
        assert_eq!(reading.strengths, vec!["Shared values".to_string()]);
        assert!(reading.remedies.is_empty());
        assert!(reading.auspicious_timing.is_none());
        assert_eq!(reading.verdict(), Some(Verdict::Compatible));
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let reading: CompatibilityReading = serde_json::from_value(serde_json::json!({
            "overall": "ok",
            "emotional": null,
            "strengths": null,
            "remedies": null,
            "auspicious_timing": null,
            "verdict": "Compatible",
            "verdict_detail": null
        }))
        .unwrap();

        assert_eq!(reading.overall, "ok");
        assert!(reading.emotional.is_empty());
        assert!(reading.strengths.is_empty());
        assert!(reading.remedies.is_empty());
        assert!(reading.auspicious_timing.is_none());
        assert!(reading.verdict_detail.is_empty());
        assert_eq!(reading.verdict(), Some(Verdict::Compatible));

        let remedy: Remedy =
            serde_json::from_value(serde_json::json!({"title": "Shukra mantra", "description": null}))
                .unwrap();
        assert_eq!(remedy.title, "Shukra mantra");
        assert!(remedy.description.is_empty());
    }

    #[test]
    fn test_unknown_verdict_is_kept_verbatim() {
        let reading = CompatibilityReading {
            verdict: "Written in the stars".to_string(),
            ..Default::default()
        };
        assert_eq!(reading.verdict(), None);
        assert_eq!(reading.verdict, "Written in the stars");
    }

    #[test]
    fn test_register_request_uses_camel_case_full_name() {
        let body = RegisterRequest {
            email: "a@b.c".to_string(),
            username: "arjun".to_string(),
            password: "secret-123".to_string(),
            full_name: Some("Arjun Rao".to_string()),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["fullName"], "Arjun Rao");

        let refresh = serde_json::to_value(RefreshRequest {
            refresh_token: "r1".to_string(),
        })
        .unwrap();
        assert_eq!(refresh, serde_json::json!({"refreshToken": "r1"}));
    }
}
