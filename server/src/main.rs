use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::{env, fs};

use clap::Parser;
use spellingbee::Dictionary;
use tonic::transport::Server;
use tonic_reflection::server::v1::{ServerReflection, ServerReflectionServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::proto::spellingbee_server::SpellingbeeServer;
use crate::service::SpellingbeeService;
use crate::stats::ServerStats;

mod service;
mod stats;

pub mod proto {
    tonic::include_proto!("spellingbee");

    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("spellingbee_descriptor");
}

/// Spelling Bee solver over gRPC.
#[derive(Parser)]
struct Options {
    /// gRPC port
    #[arg(short, long, env = "SPELLINGBEE_PORT", default_value_t = 3000)]
    port: u16,

    /// Newline separated word list
    #[arg(required_unless_present = "database")]
    dictionary: Option<PathBuf>,

    /// Load the word list from DATABASE_URL instead of a file
    #[arg(long, conflicts_with = "dictionary")]
    database: bool,
}

async fn load_words(options: &Options) -> Result<Vec<String>, Box<dyn Error>> {
    match &options.dictionary {
        Some(path) => Ok(spellingbee::read_words(path)?),
        None => {
            let db = entity::get_connection().await?;
            Ok(entity::load_words(&db).await?)
        }
    }
}

fn reflection_service(
) -> Result<ServerReflectionServer<impl ServerReflection>, tonic_reflection::server::Error> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1()
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("interrupt received, quitting");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = Options::parse();

    let words = load_words(&options).await?;
    let stats = Arc::new(ServerStats::default());
    let dict = Arc::new(Dictionary::with_stats(words, stats.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], options.port));
    match env::current_exe().and_then(fs::metadata).and_then(|m| m.modified()) {
        Ok(mtime) => info!(?mtime, %addr, "server listening"),
        Err(err) => {
            warn!(%err, "unable to get binary mtime");
            info!(%addr, "server listening");
        }
    }

    Server::builder()
        .add_service(SpellingbeeServer::new(SpellingbeeService::new(dict, stats)))
        .add_service(reflection_service()?)
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    Ok(())
}
