use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::error;

use crate::model::teams::TeamsMessage;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Teams responded with status {status}")]
    ErrorStatus { status: StatusCode, body: String },
}

/// 변환된 카드를 Teams webhook으로 한 번 POST 한다.
/// 재시도 없음. 2xx가 아니면 Err.
pub async fn send_teams_card(
    client: &Client,
    webhook_url: &str,
    card: &TeamsMessage,
) -> Result<StatusCode, DeliveryError> {
    let response = client.post(webhook_url).json(card).send().await?;

    let status = response.status();
    if status.is_success() {
        return Ok(status);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Teams API error: {} {}", status, body);

    Err(DeliveryError::ErrorStatus { status, body })
}
