//! Static file server for previewing a built sketch.

use anyhow::{Context, bail};
use axum::Router;
use colored::Colorize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(root: PathBuf, addr: SocketAddr) -> anyhow::Result<()> {
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;

    println!("{}: serving {} on http://{}", "ok".green().bold(), root.display(), local);
    info!(root = %root.display(), %local, "preview server started");

    axum::serve(listener, router(&root)).await.context("server stopped")?;
    Ok(())
}
