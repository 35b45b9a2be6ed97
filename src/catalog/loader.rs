use crate::app::events::AppEvent;
use crate::catalog::model::Song;
use reqwest::Client;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read and parse the catalog document from a path or URL.
pub async fn load_catalog(client: &Client, source: &str) -> Result<Vec<Song>, CatalogError> {
    let bytes = if is_url(source) {
        client
            .get(source)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec()
    } else {
        tokio::fs::read(source).await?
    };

    Ok(serde_json::from_slice(&bytes)?)
}

/// One-shot catalog load at startup.
///
/// On failure the error is logged and nothing is sent: the catalog stays
/// empty and the UI renders zero songs. If the app exits first the send
/// fails and the result is dropped.
pub fn spawn_load(client: Client, source: String, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        match load_catalog(&client, &source).await {
            Ok(songs) => {
                tracing::info!("catalog loaded: {} songs from {}", songs.len(), source);
                let _ = tx.send(AppEvent::CatalogUpdate(songs)).await;
            }
            Err(e) => {
                tracing::error!("catalog load failed from {}: {}", source, e);
            }
        }
    });
}
