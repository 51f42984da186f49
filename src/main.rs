use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use trackmyprogress_api::app::create_app_with_cors;
use trackmyprogress_api::config::ServerConfig;
use trackmyprogress_api::state::SharedAppState;
use trackmyprogress_api::utils::init_email_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
    .init();

  let server_config = ServerConfig::from_env()?;
  let cors = server_config.cors_layer()?;

  let email_service = init_email_service();
  let app_state = SharedAppState::new(email_service);
  let app = create_app_with_cors(app_state, cors);

  let address = server_config.address();
  let listener = tokio::net::TcpListener::bind(&address).await?;

  tracing::info!("Server running on http://{}", address);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
