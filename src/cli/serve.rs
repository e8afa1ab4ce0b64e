//! The `serve` command: run the persistence backend.

use color_eyre::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::server::start_server;
use crate::store::JsonFileStore;

/// Bind and serve until interrupted.
pub async fn handle_serve_command(addr: SocketAddr, data_dir: PathBuf) -> Result<()> {
    let store = Arc::new(JsonFileStore::new(data_dir));
    let (handle, local_addr) = start_server(addr, store).await?;
    println!("clientele backend listening on http://{}", local_addr);
    println!("collections: /customers /tasks /sales");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = handle => {
            // The server task only ends on a bind/accept failure.
            if let Err(error) = result {
                tracing::error!(%error, "server task failed");
            }
        }
    }
    Ok(())
}
