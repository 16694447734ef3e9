pub mod global_error;
pub mod relay;
pub mod teams;

pub use relay::{HealthResponse, RelayResponse, ServiceEndpoints, ServiceInfo};
pub use teams::TeamsMessage;
