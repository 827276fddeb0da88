use anyhow::Result;
use clap::Parser;
use docgrid::{
    auth::{self, Credentials, DOCS_READONLY_SCOPE},
    decode::{self, Triple},
    doc,
    grid::Grid,
};
use reqwest::Client;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Reveal the message hidden in a document's coordinate table.
#[derive(Parser, Debug)]
#[command(
    name = "docgrid",
    about = "Decode the grid message hidden in a document's coordinate table"
)]
struct Args {
    /// Identifier of the document holding the table.
    #[arg(long, env = "DOCGRID_DOCUMENT_ID")]
    document_id: String,

    /// Path to the service-account key file.
    #[arg(
        long,
        env = "GOOGLE_APPLICATION_CREDENTIALS",
        default_value = "credentials.json"
    )]
    credentials: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let args = Args::parse();

    // ─── 2) one client, passed explicitly to both calls ──────────────
    let client = Client::new();

    // ─── 3) fetch + decode; any transport/auth failure means no data ─
    let triples = match fetch_triples(&client, &args).await {
        Ok(triples) => triples,
        Err(err) => {
            error!(error = %err, "document fetch failed");
            Vec::new()
        }
    };

    // ─── 4) render ───────────────────────────────────────────────────
    match Grid::from_triples(&triples) {
        Some(grid) => {
            info!(
                width = grid.width(),
                height = grid.height(),
                "decoded secret message follows"
            );
            for line in grid.render_lines() {
                println!("{line}");
            }
        }
        None => println!("No valid data found."),
    }

    Ok(())
}

async fn fetch_triples(client: &Client, args: &Args) -> Result<Vec<Triple>> {
    let credentials = Credentials::from_file(&args.credentials)?;
    let token = auth::fetch_access_token(client, &credentials, &[DOCS_READONLY_SCOPE]).await?;
    let document = doc::fetch_document(client, &token, &args.document_id).await?;
    Ok(decode::parse_rows(&doc::extract_row_fragments(&document)))
}
