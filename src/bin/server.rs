//! Taskboard HTTP server entry point.

use std::env;
use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::http::build_router;
use taskboard::http::server::{self, ServerConfig};
use taskboard::http::state::AppState;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::services::TaskStoreService;
use taskboard::user::adapters::memory::InMemoryUserRepository;
use taskboard::user::services::UserRosterService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();

    let tasks = TaskStoreService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let users = UserRosterService::new(Arc::new(InMemoryUserRepository::new()));

    let router = build_router(AppState::new(tasks, users));
    server::run(config, router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taskboard=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn load_config() -> ServerConfig {
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    ServerConfig::new(host, port)
}
