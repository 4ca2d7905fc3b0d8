use std::sync::Arc;

use clap::Parser;
use rostra_api::{
    application::http::server::http_server::{router, shutdown_signal, state},
    args::{Args, Environment},
};
use rostra_core::{application::seed, domain::common::RostraConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(args: &Args) {
    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&args.log.filter));

    if args.env == Environment::Production {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args);

    let (postgres, app_state) = state(args.clone()).await?;

    let config = RostraConfig::from(args.as_ref().clone());
    seed(
        &app_state.service,
        &config,
        args.admin.seed_departments_file.as_deref(),
    )
    .await?;

    let router = router(app_state)?;

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", args.server.host, args.server.port))
            .await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped, closing database connection");
    postgres.close().await?;

    Ok(())
}
