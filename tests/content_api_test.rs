use httpmock::prelude::*;
use kundli_milan::config::toml_config::ServiceConfig;
use kundli_milan::core::InterpretationService;
use kundli_milan::domain::model::{CompatibilityRequest, Verdict};
use kundli_milan::{
    CompatibilityScore, ContentApiClient, MatchEngine, MilanError, Nakshatra, PersonProfile,
    Session, TomlConfig, ZodiacSign,
};

fn config_for(server: &MockServer) -> TomlConfig {
    TomlConfig {
        content_api: ServiceConfig {
            base_url: server.base_url(),
        },
        ..Default::default()
    }
}

fn arjun() -> PersonProfile {
    PersonProfile {
        name: "Arjun".to_string(),
        moon_sign: ZodiacSign::Mesha,
        nakshatra: Nakshatra::Ashwini,
        ascendant_rashi: ZodiacSign::Simha,
    }
}

fn meera() -> PersonProfile {
    PersonProfile {
        name: "Meera".to_string(),
        moon_sign: ZodiacSign::Vrishabha,
        nakshatra: Nakshatra::Rohini,
        ascendant_rashi: ZodiacSign::Kanya,
    }
}

fn reading_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "score": 18,
        "reading": {
            "overall": "Fire meets earth",
            "emotional": "Arjun leads, Meera steadies",
            "physical": "Complementary rhythms",
            "intellectual": "Different paces of thought",
            "spiritual": "Shared devotion",
            "strengths": ["Loyalty", "Warmth", "Patience"],
            "nurture": ["Pace of decisions", "Money habits"],
            "life_together": "A grounded household",
            "remedies": [
                {"title": "Shukra mantra", "description": "Chant on Fridays"}
            ],
            "auspicious_timing": "Spring",
            "verdict": "Moderately Compatible",
            "verdict_detail": "Works with effort"
        }
    })
}

#[tokio::test]
async fn test_reading_request_carries_profiles_and_score() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/ai/compatibility")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "person1": {"name": "Arjun", "moon_sign": "Mesha", "nakshatra": "Ashwini", "ascendant_rashi": "Simha"},
                "person2": {"name": "Meera", "moon_sign": "Vrishabha", "nakshatra": "Rohini", "ascendant_rashi": "Kanya"},
                "score": 18
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(reading_body());
    });

    let engine = MatchEngine::new(ContentApiClient::new(&config_for(&server)).unwrap());
    let report = engine
        .analyze(&Session::anonymous(), &arjun(), &meera())
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(report.score.value(), 18);
    assert_eq!(report.percentage(), 50);
    assert_eq!(report.reading.overall, "Fire meets earth");
    assert_eq!(report.reading.strengths.len(), 3);
    assert_eq!(report.reading.remedies[0].title, "Shukra mantra");
    assert_eq!(report.reading.auspicious_timing.as_deref(), Some("Spring"));
    assert_eq!(report.reading.verdict(), Some(Verdict::ModeratelyCompatible));
}

#[tokio::test]
async fn test_authenticated_session_sends_bearer_token() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/ai/compatibility")
            .header("authorization", "Bearer access-abc");
        then.status(200).json_body(reading_body());
    });

    let session = Session::established(
        serde_json::from_value(serde_json::json!({
            "access_token": "access-abc",
            "refresh_token": "refresh-abc",
            "token_type": "Bearer",
            "user": {"id": "1", "email": "arjun@example.com", "username": "arjun"}
        }))
        .unwrap(),
    );

    let client = ContentApiClient::new(&config_for(&server)).unwrap();
    let request = CompatibilityRequest {
        person1: arjun(),
        person2: meera(),
        score: CompatibilityScore::new(18).unwrap(),
    };
    let reading = client.compatibility_reading(&session, &request).await.unwrap();

    api_mock.assert();
    assert_eq!(reading.verdict_detail, "Works with effort");
}

#[tokio::test]
async fn test_sparse_reading_is_accepted() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/v1/ai/compatibility");
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "score": 18,
            "reading": {"verdict": "Compatible", "strengths": null, "remedies": null}
        }));
    });

    let engine = MatchEngine::new(ContentApiClient::new(&config_for(&server)).unwrap());
    let report = engine
        .analyze(&Session::anonymous(), &arjun(), &meera())
        .await
        .unwrap();

    assert!(report.reading.strengths.is_empty());
    assert!(report.reading.remedies.is_empty());
    assert_eq!(report.reading.verdict(), Some(Verdict::Compatible));
}

#[tokio::test]
async fn test_service_failure_surfaces_detail() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/ai/compatibility");
        then.status(500).json_body(serde_json::json!({
            "detail": "AI compatibility error: missing API key"
        }));
    });

    let engine = MatchEngine::new(ContentApiClient::new(&config_for(&server)).unwrap());
    let err = engine
        .analyze(&Session::anonymous(), &arjun(), &meera())
        .await
        .unwrap_err();

    api_mock.assert();
    match err {
        MilanError::RemoteError {
            service,
            status,
            message,
        } => {
            assert_eq!(service, "content API");
            assert_eq!(status, 500);
            assert_eq!(message, "AI compatibility error: missing API key");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_name_never_reaches_the_service() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/ai/compatibility");
        then.status(200).json_body(reading_body());
    });

    let mut nameless = meera();
    nameless.name = String::new();

    let engine = MatchEngine::new(ContentApiClient::new(&config_for(&server)).unwrap());
    let result = engine
        .analyze(&Session::anonymous(), &arjun(), &nameless)
        .await;

    assert!(matches!(result, Err(MilanError::ValidationError { .. })));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let config = TomlConfig {
        content_api: ServiceConfig {
            // 保留埠，沒有服務在監聽
            base_url: "http://127.0.0.1:9".to_string(),
        },
        ..Default::default()
    };

    let engine = MatchEngine::new(ContentApiClient::new(&config).unwrap());
    let err = engine
        .analyze(&Session::anonymous(), &arjun(), &meera())
        .await
        .unwrap_err();

    assert!(matches!(err, MilanError::ApiError(_)));
    assert_eq!(err.severity(), kundli_milan::utils::error::ErrorSeverity::Medium);
}
