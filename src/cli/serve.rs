//! Serve command implementation

use anyhow::{Result, anyhow};
use chrono::Utc;
use tracing::info;

use voxlearn::Config;
use voxlearn::api::{ApiState, start_http_server};
use voxlearn::store::MemStore;

/// Run the REST API with the sample course until the process is killed
pub async fn serve_command(config: &Config) -> Result<()> {
    let state = ApiState::new(MemStore::with_sample_data(Utc::now()));
    let addr = config.server_addr();
    let handle = start_http_server(state, &addr)?;
    info!("[voxlearn:cli] serving sample course on http://{}/api", addr);

    tokio::task::spawn_blocking(move || handle.join())
        .await?
        .map_err(|_| anyhow!("HTTP server thread panicked"))
}
