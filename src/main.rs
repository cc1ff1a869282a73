//! Server binary for the eisenhower task board.

use clap::Parser;
use eisenhower::web::{self, state::AppState};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::info;

#[derive(Parser)]
#[command(name = "eisenhower", about = "Prioritised in-memory to-do board", version)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "EISENHOWER_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,

    /// HTTP server port
    #[arg(long, env = "EISENHOWER_PORT", default_value_t = 8000)]
    port: u16,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, env = "EISENHOWER_LOG", default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log)
        .compact()
        .init();

    let addr = SocketAddr::new(args.bind, args.port);
    info!("starting task board on {addr}");
    web::serve(addr, AppState::new()).await
}
