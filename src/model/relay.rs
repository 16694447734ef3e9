use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
    pub teams_response: u16,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub webhook_configured: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: ServiceEndpoints,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceEndpoints {
    pub health: String,
    pub webhook: String,
}
