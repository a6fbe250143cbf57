use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use rust_kalakriti::entities::{seed_admin, setup_schema};
use rust_kalakriti::routes::api_router;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db: DatabaseConnection = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    setup_schema(&db).await;

    let admin_username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_owned());
    let admin_password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");
    seed_admin(&db, &admin_username, &admin_password).await;

    let shared_db = Arc::new(db);
    let app = api_router(shared_db).layer(TraceLayer::new_for_http());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await.expect("Server error");
}
