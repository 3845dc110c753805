use vapi_rs::consts::VAPI_BASE_URL;
use vapi_rs::orders::OrderDirectory;
use vapi_rs::types::AppState;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(true)
                .with_line_number(true),
        )
        .with(tracing_subscriber::filter::Targets::new().with_targets([
            ("hyper", tracing_subscriber::filter::LevelFilter::OFF),
            ("vapi_rs", tracing_subscriber::filter::LevelFilter::DEBUG),
        ]));
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let vapi_api_key = env::var("VAPI_API_KEY").expect("VAPI_API_KEY not set!");
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let http_client = reqwest::Client::new();

    let app_state = Arc::new(AppState {
        vapi_api_key,
        vapi_base_url: VAPI_BASE_URL.to_string(),
        http_client,
        orders: OrderDirectory::new(),
    });

    let app = vapi_rs::router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "server listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
