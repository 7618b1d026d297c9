use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::database::{seed, ActivityStore};
use activities::web::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // 2. Seed the registry
    let config = AppConfig::from_env();
    let activities = seed::load_activities(config.seed_file.as_deref())
        .context("could not load the activity seed")?;
    info!(
        activities = activities.len(),
        build_id = env!("ACTIVITIES_BUILD_ID"),
        "activity registry ready"
    );

    let app = app::build_router(ActivityStore::new(activities), &config.static_dir);

    // 3. Bind, falling back to the next port when taken
    let addr = config.socket_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "could not bind, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!("open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
