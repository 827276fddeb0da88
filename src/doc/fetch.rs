// src/doc/fetch.rs

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

use super::types::Document;
use crate::auth::AccessToken;

static DOCS_API_BASE: &str = "https://docs.googleapis.com/v1/documents/";

/// Fetch one document's structured content by identifier.
///
/// Issued once, no retry, no explicit timeout; transport defaults apply.
/// Any failure (unreachable service, bad credentials, document not shared)
/// surfaces as a plain error for the caller's single catch point.
#[instrument(level = "info", skip(client, token))]
pub async fn fetch_document(
    client: &Client,
    token: &AccessToken,
    document_id: &str,
) -> Result<Document> {
    let url = Url::parse(DOCS_API_BASE)?
        .join(document_id)
        .with_context(|| format!("building document URL for {:?}", document_id))?;

    let document: Document = client
        .get(url.clone())
        .bearer_auth(&token.access_token)
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("non-success status from {}", url))?
        .json()
        .await
        .context("decoding document body")?;

    info!(
        title = document.title.as_deref().unwrap_or(""),
        "document fetched"
    );
    Ok(document)
}
