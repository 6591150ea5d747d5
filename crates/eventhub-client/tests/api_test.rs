// HTTP-level tests for the typed API facade, against a mock backend

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eventhub_api::{EventFilters, EventSort, EventType, SlotFilters};
use eventhub_client::{ClientError, EventHubApiClient, HttpClientConfig, ResumeUpload};

fn client_for(server: &MockServer) -> EventHubApiClient {
    EventHubApiClient::new(HttpClientConfig::new(&server.uri())).unwrap()
}

fn event_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "desc",
        "type": "hackathon",
        "city": "Astana",
        "is_online": false,
        "date_start": "2025-12-01T09:00:00",
        "date_end": null,
        "organizer_id": null,
        "banner": null,
        "requirements": null,
        "tags": ["AI"],
        "source": null,
        "source_url": null,
        "created_at": "2025-11-01T00:00:00",
        "updated_at": "2025-11-01T00:00:00"
    })
}

#[tokio::test]
async fn events_list_passes_filters_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(query_param("type", "hackathon"))
        .and(query_param("is_online", "false"))
        .and(query_param("sort", "upcoming"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([event_json(1, "HackNU"), event_json(2, "Decentrathon")])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filters = EventFilters {
        r#type: Some(EventType::Hackathon),
        is_online: Some(false),
        sort: Some(EventSort::Upcoming),
        ..Default::default()
    };
    let events = client.events_list(&filters).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, 1);
    assert_eq!(events[0].r#type, EventType::Hackathon);
    assert_eq!(events[1].title, "Decentrathon");
}

#[tokio::test]
async fn events_list_ceiling_overrides_short_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([event_json(1, "Slow but alive")]))
                .set_delay(std::time::Duration::from_secs(1)),
        )
        .mount(&server)
        .await;

    // The client-wide read timeout is far below the response delay; the
    // fixed per-request collection ceiling still lets the fetch complete.
    let client =
        EventHubApiClient::new(HttpClientConfig::new(&server.uri()).with_timeouts(1000, 200))
            .unwrap();
    let events = client.events_list(&EventFilters::default()).await.unwrap();
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn events_list_decodes_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let events = client.events_list(&EventFilters::default()).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn events_list_surfaces_decode_error_on_non_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "oops"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .events_list(&EventFilters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn event_get_maps_404_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_json(1, "HackNU")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let found = client.event_get(1).await.unwrap();
    assert_eq!(found.unwrap().title, "HackNU");

    let missing = client.event_get(999).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn event_create_posts_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events/"))
        .and(body_string_contains("\"title\":\"Demo Day\""))
        .and(body_string_contains("\"type\":\"meetup\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(event_json(10, "Demo Day")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let create = eventhub_api::EventCreate {
        title: "Demo Day".to_string(),
        r#type: EventType::Meetup,
        is_online: false,
        date_start: "2025-12-10T18:00:00".to_string(),
        city: Some("Almaty".to_string()),
        ..Default::default()
    };
    let event = client.event_create(&create).await.unwrap();
    assert_eq!(event.id, 10);
}

#[tokio::test]
async fn event_update_sends_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/events/1"))
        .and(body_string_contains("\"title\":\"Renamed\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_json(1, "Renamed")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = eventhub_api::EventUpdate {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let event = client.event_update(1, &update).await.unwrap();
    assert_eq!(event.title, "Renamed");
}

#[tokio::test]
async fn login_stores_tokens_and_authenticates_later_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("username=admin%40eventhub.kz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-access",
            "refresh_token": "jwt-refresh",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .and(header("authorization", "Bearer jwt-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": {"total": 10, "active": 7},
            "events": {"total": 42}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.is_authenticated());

    let token = client.login("admin@eventhub.kz", "secret").await.unwrap();
    assert_eq!(token.access_token, "jwt-access");
    assert!(client.is_authenticated());

    let stats = client.admin_stats().await.unwrap();
    assert_eq!(stats.users.total, 10);
    assert_eq!(stats.users.active, 7);
    assert_eq!(stats.events.total, 42);
}

#[tokio::test]
async fn login_rejection_maps_to_auth_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "bad creds"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.login("admin@eventhub.kz", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::AuthFailed(_)));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn admin_401_clears_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .http_client()
        .set_tokens("stale".to_string(), "stale".to_string());

    let err = client.admin_users().await.unwrap_err();
    assert!(err.is_unauthorized());
    // Token absence now implies unauthenticated; the caller routes to login
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn admin_403_is_unauthorized_but_keeps_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/events"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "forbidden"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .http_client()
        .set_tokens("user-token".to_string(), "r".to_string());

    let err = client.admin_events().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn register_rejects_bad_mime_type_without_network_call() {
    let server = MockServer::start().await;

    let client = client_for(&server);
    let resume = ResumeUpload::new("photo.png", "image/png", vec![0u8; 1024]);
    let err = client
        .register("user@example.com", "secret", &resume)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn register_rejects_oversized_file_without_network_call() {
    let server = MockServer::start().await;

    let client = client_for(&server);
    let resume = ResumeUpload::new("cv.pdf", "application/pdf", vec![0u8; 11 * 1024 * 1024]);
    let err = client
        .register("user@example.com", "secret", &resume)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn register_uploads_valid_pdf_and_auto_logs_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "email": "user@example.com",
            "role": "talent",
            "is_active": true,
            "resume_path": "uploads/resumes/abc.pdf",
            "created_at": "2025-11-01T00:00:00"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "a",
            "refresh_token": "r"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resume = ResumeUpload::new("cv.pdf", "application/pdf", vec![0u8; 1024 * 1024]);
    let user = client
        .register("user@example.com", "secret", &resume)
        .await
        .unwrap();
    assert_eq!(user.email, "user@example.com");
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn scrape_now_returns_per_source_counts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events/scrape-now"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "done",
            "results": {"astana_hub": 12, "nu": 3},
            "total": 15
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let report = client.scrape_now().await;
    assert!(report.success);
    assert_eq!(report.results.get("astana_hub"), Some(&12));
    assert_eq!(report.total, 15);
}

#[tokio::test]
async fn scrape_now_reports_failure_inline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events/scrape-now"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let report = client.scrape_now().await;
    assert!(!report.success);
    assert!(report.results.is_empty());
    assert_eq!(report.total, 0);
}

#[tokio::test]
async fn slots_list_passes_filters_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/internship/slots"))
        .and(query_param("status", "open"))
        .and(query_param("city", "Almaty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "title": "Junior barista shift",
            "description": "Morning shift",
            "slot_start": "2025-12-01T08:00:00",
            "slot_end": "2025-12-01T12:00:00",
            "duration_hours": 4,
            "address": "Dostyk 1",
            "city": "Almaty",
            "status": "open",
            "company_id": 3,
            "created_at": "2025-11-01T00:00:00",
            "updated_at": "2025-11-01T00:00:00"
        }])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filters = SlotFilters {
        status: Some("open".to_string()),
        city: Some("Almaty".to_string()),
    };
    let slots = client.slots_list(&filters).await.unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].duration_hours, 4);
    assert_eq!(slots[0].status, "open");
}
