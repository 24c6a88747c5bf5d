//! Integration tests for the API client using wiremock mock server

use ft_auth::{Claims, SessionStore};
use ft_client::{
    ApiClient, ClientError, ProfileField, UpdateProfileRequest, classify_update_error,
};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

fn signed_token(role_id: i64) -> String {
    let claims = Claims {
        sub: Some("user-7".to_string()),
        role_id: Some(role_id),
        exp: Some(4_000_000_000),
        iat: Some(1_700_000_000),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

fn manager_session() -> (SessionStore, String) {
    let store = SessionStore::new();
    let token = signed_token(2);
    store.login(&token).unwrap();
    (store, token)
}

#[tokio::test]
async fn test_get_profile_sends_bearer_and_parses() {
    let mock_server = MockServer::start().await;
    let (session, token) = manager_session();

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", format!("Bearer {token}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "role_id": 2,
            "full_name": "Amar Hadžić",
            "email": "amar@example.com",
            "phone": "061-123-456",
            "address": "Zmaja od Bosne 7",
            "created_at": "2025-01-10T12:00:00",
            "role": { "id": 2, "name": "Upravnik" }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session);
    let profile = client.get_profile().await.unwrap();

    assert_eq!(profile.id, 12);
    assert_eq!(profile.full_name, "Amar Hadžić");
    assert_eq!(profile.role.unwrap().name, "Upravnik");
}

#[tokio::test]
async fn test_update_profile_success() {
    let mock_server = MockServer::start().await;
    let (session, _token) = manager_session();

    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .and(body_string_contains("amar@example.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Profil ažuriran" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session);
    let update = UpdateProfileRequest {
        full_name: "Amar Hadžić".to_string(),
        email: "amar@example.com".to_string(),
        ..Default::default()
    };

    let result = client.update_profile(&update).await.unwrap();

    assert_eq!(result["message"], "Profil ažuriran");
}

#[tokio::test]
async fn test_update_profile_error_detail_classifies_to_field() {
    let mock_server = MockServer::start().await;
    let (session, _token) = manager_session();

    Mock::given(method("PUT"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Trenutna lozinka nije ispravna"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session);
    let update = UpdateProfileRequest {
        full_name: "Amar Hadžić".to_string(),
        email: "amar@example.com".to_string(),
        current_password: Some("pogresna".to_string()),
        new_password: Some("tajna123".to_string()),
        confirm_password: Some("tajna123".to_string()),
        ..Default::default()
    };

    let err = client.update_profile(&update).await.unwrap_err();

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 400);
            assert_eq!(
                classify_update_error(&message),
                ProfileField::CurrentPassword
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_clears_session() {
    let mock_server = MockServer::start().await;
    let (session, _token) = manager_session();

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Could not validate credentials"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session.clone());
    let err = client.get_profile().await.unwrap_err();

    assert!(matches!(err, ClientError::SessionExpired { .. }));
    assert!(session.credential().is_none());
    assert!(session.expiry().is_none());
}

#[tokio::test]
async fn test_list_tenants_filters_to_tenant_role() {
    let mock_server = MockServer::start().await;
    let (session, _token) = manager_session();

    Mock::given(method("GET"))
        .and(path("/api/manager/tenants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "full_name": "Lejla Begić",
                "email": "lejla@example.com",
                "phone": "062-000-111",
                "address": "Titova 12",
                "role_id": 1,
                "created_at": "2025-02-01T09:00:00"
            },
            {
                "id": 2,
                "full_name": "Mirza Kovač",
                "email": "mirza@example.com",
                "phone": null,
                "address": null,
                "role_id": 3,
                "created_at": "2025-02-02T09:00:00"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session);
    let tenants = client.list_tenants().await.unwrap();

    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].full_name, "Lejla Begić");
}

#[tokio::test]
async fn test_submit_note_posts_body() {
    let mock_server = MockServer::start().await;
    let (session, _token) = manager_session();

    Mock::given(method("POST"))
        .and(path("/api/manager/notes"))
        .and(body_string_contains("Dogovoren termin popravke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "admin_id": 12,
            "tenant_id": 1,
            "note": "Dogovoren termin popravke",
            "created_at": "2025-03-01T10:00:00"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session);
    let note = client
        .submit_note(1, "Dogovoren termin popravke")
        .await
        .unwrap();

    assert_eq!(note.id, 5);
    assert_eq!(note.tenant_id, 1);
}

#[tokio::test]
async fn test_survey_stats_parse() {
    let mock_server = MockServer::start().await;
    let (session, _token) = manager_session();

    Mock::given(method("GET"))
        .and(path("/api/surveys/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_surveys": 4,
            "satisfaction_levels": {
                "vrlo_zadovoljan": 0,
                "zadovoljan": 1,
                "neutralan": 0,
                "nezadovoljan": 2,
                "vrlo_nezadovoljan": 1
            },
            "categories": { "grijanje": 3, "lift": 1 }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session);
    let stats = client.survey_stats().await.unwrap();

    assert_eq!(stats.total_surveys, 4);
    assert_eq!(stats.satisfaction_levels.dissatisfied, 2);
    assert_eq!(stats.categories.get("grijanje"), Some(&3));
}

#[tokio::test]
async fn test_list_surveys_parse() {
    let mock_server = MockServer::start().await;
    let (session, _token) = manager_session();

    Mock::given(method("GET"))
        .and(path("/api/surveys/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 9,
                "tenant_id": 1,
                "issue_id": 4,
                "satisfaction_level": "nezadovoljan",
                "issue_category": "lift",
                "description": "Lift ne radi već sedam dana",
                "suggestions": "Brže reagovati",
                "contact_preference": "telefon",
                "created_at": "2025-04-01T11:30:00",
                "tenant": { "id": 1, "full_name": "Lejla Begić", "email": "lejla@example.com" }
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session);
    let surveys = client.list_surveys().await.unwrap();

    assert_eq!(surveys.len(), 1);
    assert_eq!(surveys[0].issue_category, "lift");
    assert_eq!(surveys[0].tenant.as_ref().unwrap().full_name, "Lejla Begić");
}

#[tokio::test]
async fn test_api_error_without_detail_falls_back_to_body() {
    let mock_server = MockServer::start().await;
    let (session, _token) = manager_session();

    Mock::given(method("GET"))
        .and(path("/api/surveys/all"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri(), session);
    let err = client.list_surveys().await.unwrap_err();

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
