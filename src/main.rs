use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use sentry_teams_relay::api;
use sentry_teams_relay::configuration::get_configuration;
use sentry_teams_relay::telemetry::{get_subscriber, init_subscriber};
use tracing_log::log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber(
        "sentry_teams_relay".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    info!("애플리케이션 시작 중...");

    dotenv().ok();
    info!("환경 변수 로드 완료");

    let settings = get_configuration()?;
    let port = settings.port;
    info!(
        "Teams webhook 설정 여부: {}",
        if settings.webhook_configured() { "Yes" } else { "No" }
    );

    let settings_data = Data::new(settings);
    let http_client = Data::new(reqwest::Client::new());

    info!("서버 시작 중: http://0.0.0.0:{}", port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(settings_data.clone())
            .app_data(http_client.clone())
            .service(api::service_info)
            .service(api::health_check)
            .service(api::relay_to_teams)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
