use std::io;

use clap::Parser;
use people_api::{
    consts::consts::{DEFAULT_ADDRESS, DEFAULT_ALLOWED_ORIGIN, DEFAULT_HTTP_WORKERS, DEFAULT_PORT},
    server::{self, cors::CorsOptions, ServerOptions},
};

/// 👥 People API, serves a fixed list of people as JSON to the local frontend
#[derive(Parser, Debug)]
struct Cli {
    /// Port the HTTP server will run on
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address the HTTP server will run on
    #[clap(short, long, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Disable the per-request access log
    #[clap(long)]
    quiet_http: bool,

    /// Number of HTTP worker threads
    #[clap(long, default_value_t = DEFAULT_HTTP_WORKERS)]
    http_workers: usize,

    /// The only origin allowed to read responses cross-origin (with credentials)
    #[clap(long, default_value = DEFAULT_ALLOWED_ORIGIN)]
    allowed_origin: String,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let options = ServerOptions::default()
        .set_address(args.address)
        .set_port(args.port)
        .set_http_workers(args.http_workers)
        .set_log_http(!args.quiet_http)
        .set_cors(CorsOptions::default().set_allowed_origin(args.allowed_origin));

    server::run(options).await
}
