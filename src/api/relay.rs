use actix_web::{HttpResponse, post, web};
use serde_json::Value;
use tracing::{debug, info};

use crate::configuration::Settings;
use crate::model::global_error::{AppError, ErrorCode};
use crate::model::relay::RelayResponse;
use crate::transform::transform_to_teams_card;
use crate::util::teams::send_teams_card;

#[utoipa::path(
    post,
    path = "/teams-hook",
    summary = "Sentry webhook 수신 후 Teams로 전달",
    responses(
        (status = 200, description = "Teams 전달 성공", body = RelayResponse),
        (status = 500, description = "webhook URL 미설정 또는 전달 실패"),
    ),
)]
#[post("/teams-hook")]
pub async fn relay_to_teams(
    body: web::Json<Value>,
    settings: web::Data<Settings>,
    http: web::Data<reqwest::Client>,
) -> Result<HttpResponse, AppError> {
    info!("Sentry webhook 수신");

    let Some(webhook_url) = settings.teams_webhook_url.as_deref() else {
        log::error!("TEAMS_WEBHOOK_URL이 설정되지 않았습니다");
        return Err(AppError::new(ErrorCode::WebhookNotConfigured));
    };

    let payload = body.into_inner();
    debug!("수신 payload: {}", payload);

    let card = transform_to_teams_card(&payload);

    let status = send_teams_card(http.get_ref(), webhook_url, &card)
        .await
        .map_err(|e| {
            log::error!("Teams 전달 중 오류 발생: {}", e);
            AppError::with_detail(ErrorCode::ForwardFailed, e.to_string())
        })?;

    info!("Teams 전달 완료. Status: {}", status);

    Ok(HttpResponse::Ok().json(RelayResponse {
        success: true,
        message: "Webhook forwarded to Teams".to_string(),
        teams_response: status.as_u16(),
    }))
}
