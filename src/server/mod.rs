pub mod cors;
pub mod routes;

use std::io;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};

use crate::{
    consts::consts::{DEFAULT_ADDRESS, DEFAULT_HTTP_WORKERS, DEFAULT_PORT, PEOPLE_PATH},
    error::ConfigError,
    model::directory::Directory,
};

use self::cors::CorsOptions;

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub address: String,
    pub port: u16,
    pub http_workers: usize,
    pub log_http: bool,
    pub cors: CorsOptions,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl ServerOptions {
    pub fn set_address(mut self, address: String) -> Self {
        self.address = address;
        self
    }

    pub fn set_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn set_http_workers(mut self, http_workers: usize) -> Self {
        self.http_workers = http_workers;
        self
    }

    /// Logs every request with actix's access log format
    pub fn set_log_http(mut self, log_http: bool) -> Self {
        self.log_http = log_http;
        self
    }

    pub fn set_cors(mut self, cors: CorsOptions) -> Self {
        self.cors = cors;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // actix asserts a non-zero worker count
        if self.http_workers == 0 {
            return Err(ConfigError::InvalidWorkers);
        }

        self.cors.validate()
    }
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            http_workers: DEFAULT_HTTP_WORKERS,
            log_http: true,
            cors: CorsOptions::default(),
        }
    }
}

/// Builds the application for one worker, shared by `run` and the tests
pub fn app(
    directory: Directory,
    cors: &CorsOptions,
    log_http: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(Data::new(directory))
        .configure(routes::configure)
        .wrap(cors.build())
        .wrap(Condition::new(log_http, middleware::Logger::default()))
}

/// Serves the people API until the process is terminated
pub async fn run(options: ServerOptions) -> io::Result<()> {
    options.validate()?;

    let ServerOptions {
        address,
        port,
        http_workers,
        log_http,
        cors,
    } = options;

    let directory = Directory::default();

    log::info!("starting HTTP server on port {}.", port);

    log::info!(
        "People endpoint: http://{}:{}{} (allowed origin {})",
        address,
        port,
        PEOPLE_PATH,
        cors.allowed_origin
    );

    HttpServer::new(move || app(directory.clone(), &cors, log_http))
        .workers(http_workers)
        .bind((address, port))?
        .run()
        .await
}
