mod extract;
mod routes;

use quoteboard_app::infrastructure::db;
use quoteboard_app::AppContext;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let token_secret = std::env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set");
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let conn = db::create_connection(&database_url)
        .await
        .expect("Failed to connect to database");
    db::run_migrations(&conn)
        .await
        .expect("Failed to run migrations");

    let ctx = AppContext::new(conn, &token_secret);
    let app = routes::router(ctx);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
