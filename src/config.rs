use crate::store::firestore::DEFAULT_ENDPOINT;
use crate::store::FirestoreConfig;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "listing_page", version, about = "Serves real-estate listing detail pages")]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Load listings from a JSON file (`{ "<id>": {...} }`) into the local store.
    Seed { file: PathBuf },
}

#[derive(Debug, Clone, Args)]
pub struct Config {
    #[arg(long, env = "LISTING_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "LISTING_WORKERS", default_value_t = 8)]
    pub workers: usize,

    #[arg(long, env = "LISTING_DB", default_value = "listings.sqlite3")]
    pub db_path: String,

    /// Read listings from this Firestore project instead of the local database.
    #[arg(long, env = "FIRESTORE_PROJECT")]
    pub firestore_project: Option<String>,

    #[arg(long, env = "FIRESTORE_API_KEY", hide_env_values = true)]
    pub firestore_api_key: Option<String>,

    #[arg(long, env = "FIRESTORE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub firestore_endpoint: Url,
}

impl Config {
    pub fn firestore(&self) -> Option<FirestoreConfig> {
        self.firestore_project.as_ref().map(|project| FirestoreConfig {
            endpoint: self.firestore_endpoint.clone(),
            project_id: project.clone(),
            api_key: self.firestore_api_key.clone(),
        })
    }
}
