use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{App, test};
use httptest::matchers::*;
use httptest::responders::*;
use httptest::{Expectation, Server};
use sentry_teams_relay::api;
use sentry_teams_relay::configuration::Settings;
use serde_json::{Value, json};

fn settings_with(webhook_url: Option<String>) -> Settings {
    Settings {
        port: 0,
        teams_webhook_url: webhook_url,
    }
}

// 스펙 시나리오 1: 전달 성공 시 Teams가 받은 카드와 응답 envelope 검증
#[actix_web::test]
async fn relay_forwards_transformed_card_to_teams() {
    let server = Server::run();

    let expected_card = json!({
        "type": "message",
        "attachments": [{
            "contentType": "application/vnd.microsoft.card.adaptive",
            "content": {
                "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
                "type": "AdaptiveCard",
                "version": "1.2",
                "body": [
                    {
                        "type": "TextBlock",
                        "text": "🔴 Sentry Alert: created",
                        "weight": "bolder",
                        "size": "large",
                        "wrap": true
                    },
                    {
                        "type": "FactSet",
                        "facts": [
                            { "title": "Project", "value": "Unknown Project" },
                            { "title": "Level", "value": "ERROR" },
                            { "title": "Title", "value": "NPE" }
                        ]
                    },
                    {
                        "type": "TextBlock",
                        "text": "No message available",
                        "wrap": true,
                        "separator": true
                    }
                ],
                "actions": [{
                    "type": "Action.OpenUrl",
                    "title": "View in Sentry",
                    "url": "http://x/1"
                }]
            }
        }]
    });

    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/teams"),
            request::body(json_decoded(eq(expected_card))),
        ])
        .respond_with(status_code(200)),
    );

    let app = test::init_service(
        App::new()
            .app_data(Data::new(settings_with(Some(
                server.url("/teams").to_string(),
            ))))
            .app_data(Data::new(reqwest::Client::new()))
            .service(api::relay_to_teams),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/teams-hook")
        .set_json(json!({
            "action": "created",
            "data": {
                "issue": {
                    "title": "NPE",
                    "level": "error",
                    "web_url": "http://x/1"
                }
            }
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Webhook forwarded to Teams"));
    assert_eq!(body["teamsResponse"], json!(200));
}

// 스펙 시나리오 2: URL 미설정이면 네트워크 호출 없이 500
#[actix_web::test]
async fn relay_without_webhook_url_returns_configuration_error() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(settings_with(None)))
            .app_data(Data::new(reqwest::Client::new()))
            .service(api::relay_to_teams),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/teams-hook")
        .set_json(json!({ "action": "created" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Teams webhook URL not configured"));
    assert!(body.get("details").is_none());
}

// 스펙 시나리오 3: Teams가 에러 status를 주면 호출자에게 500 + details
#[actix_web::test]
async fn relay_surfaces_teams_error_status_as_failure() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/teams"))
            .respond_with(status_code(400).body("Bad payload")),
    );

    let app = test::init_service(
        App::new()
            .app_data(Data::new(settings_with(Some(
                server.url("/teams").to_string(),
            ))))
            .app_data(Data::new(reqwest::Client::new()))
            .service(api::relay_to_teams),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/teams-hook")
        .set_json(json!({ "action": "created" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Failed to forward webhook"));
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("400"), "details was: {details}");
}

// 연결 자체가 실패해도 동일한 에러 envelope
#[actix_web::test]
async fn relay_surfaces_transport_failure() {
    // 아무도 listen하지 않는 주소
    let app = test::init_service(
        App::new()
            .app_data(Data::new(settings_with(Some(
                "http://127.0.0.1:1/teams".to_string(),
            ))))
            .app_data(Data::new(reqwest::Client::new()))
            .service(api::relay_to_teams),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/teams-hook")
        .set_json(json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Failed to forward webhook"));
    assert!(!body["details"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn health_check_reports_webhook_configured() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(settings_with(Some(
                "https://example.webhook.office.com/x".to_string(),
            ))))
            .service(api::health_check),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["webhookConfigured"], json!(true));
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[actix_web::test]
async fn health_check_reports_missing_webhook() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(settings_with(None)))
            .service(api::health_check),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["webhookConfigured"], json!(false));
}

#[actix_web::test]
async fn service_info_describes_endpoints() {
    let app = test::init_service(App::new().service(api::service_info)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["service"], json!("Sentry to Teams Webhook Proxy"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(body["endpoints"]["health"], json!("/health"));
    assert_eq!(body["endpoints"]["webhook"], json!("/teams-hook (POST)"));
}

// actix Json extractor가 잘못된 JSON을 핸들러 전에 거부한다
#[actix_web::test]
async fn malformed_json_is_rejected_before_handler() {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(settings_with(None)))
            .app_data(Data::new(reqwest::Client::new()))
            .service(api::relay_to_teams),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/teams-hook")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
