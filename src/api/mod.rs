mod health;
mod relay;

pub use crate::api::health::{health_check, service_info};
pub use crate::api::relay::relay_to_teams;

use utoipa::OpenApi;

use crate::model::relay::{HealthResponse, RelayResponse, ServiceEndpoints, ServiceInfo};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::service_info,
        health::health_check,
        relay::relay_to_teams,
    ),
    components(schemas(
        ServiceInfo,
        ServiceEndpoints,
        HealthResponse,
        RelayResponse,
    ))
)]
pub struct ApiDoc;
