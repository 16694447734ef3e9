use std::env;

pub const DEFAULT_PORT: u16 = 3000;

/// 프로세스 시작 시 한 번 읽고 이후에는 불변.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub teams_webhook_url: Option<String>,
}

impl Settings {
    pub fn webhook_configured(&self) -> bool {
        self.teams_webhook_url.is_some()
    }
}

pub fn get_configuration() -> anyhow::Result<Settings> {
    let port = parse_port(env::var("PORT").ok());
    let teams_webhook_url = env::var("TEAMS_WEBHOOK_URL")
        .ok()
        .filter(|url| !url.is_empty());

    Ok(Settings {
        port,
        teams_webhook_url,
    })
}

// PORT가 없거나 숫자가 아니면 기본 포트 사용
fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
