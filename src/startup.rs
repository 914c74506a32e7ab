use crate::configuration::{CorsSettings, Environment, Settings};
use crate::constant::ALL_FIELDS_REQUIRED;
use crate::email_client::{EmailClient, MailTransport, SmtpMailTransport};
use crate::error::BizErrorEnum;
use crate::rate_limit::{Clock, RateLimiter, SystemClock};
use crate::{rate_limit, routes, utils};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::http::{header, StatusCode};
use actix_web::{web, App, HttpServer};
use actix_web_lab::middleware::from_fn;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Production wiring: SMTP transport and the wall clock.
    pub async fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let transport = SmtpMailTransport::new(&config.email_client).map_err(|e| {
            tracing::error!("Failed to build the SMTP transport: {:?}", e);
            BizErrorEnum::BuildMailTransportError(e)
        })?;
        Self::build_with(config, Arc::new(transport), Arc::new(SystemClock)).await
    }

    /// Build with an explicit mail transport and rate limiter clock.
    pub async fn build_with(
        config: Settings,
        transport: Arc<dyn MailTransport>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, BizErrorEnum> {
        let email_client = EmailClient::new(
            transport,
            config.email_client.sender()?,
            config.email_client.recipient()?,
            config.email_client.owner(),
        );
        let rate_limiter = RateLimiter::new(
            config.rate_limit.window(),
            config.rate_limit.max_requests,
            clock,
        );

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(|e| {
                tracing::error!("Failed to read the bound address");
                BizErrorEnum::BindTcpListenerError(e)
            })?
            .port();

        let server = run(listener, config, email_client, rate_limiter)?;
        tracing::info!("Server running on port {}", port);

        // We "save" the bound port in one of `Application`'s fields
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

fn run(
    listener: TcpListener,
    config: Settings,
    email_client: EmailClient,
    rate_limiter: RateLimiter,
) -> Result<Server, BizErrorEnum> {
    let environment = config.application.environment;
    tracing::info!("Starting in {} mode", environment.as_str());

    // Shared by every worker
    let email_client = web::Data::new(email_client);
    let rate_limiter = web::Data::new(rate_limiter);
    let client_key_source = web::Data::new(config.rate_limit.client_key_source());
    let environment_data = web::Data::new(environment);
    let assets = web::Data::new(config.assets);
    let cors_settings = config.cors;

    // Never fatal, a broken mail server only shows up in the logs
    let probe = email_client.clone();
    tokio::spawn(async move { probe.verify_connection().await });

    let server = HttpServer::new(move || {
        let frontend_dir = assets.frontend_dir.clone();
        App::new()
            .wrap(build_cors(&cors_settings, environment))
            // Outermost, so rejected CORS requests are traced too
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(form_config())
            .app_data(email_client.clone())
            .app_data(rate_limiter.clone())
            .app_data(client_key_source.clone())
            .app_data(environment_data.clone())
            .app_data(assets.clone())
            .route("/", web::get().to(routes::home))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/contact")
                            // Limiter sits on the POST route so a 405 does not cost an attempt
                            .route(
                                "/send",
                                web::post()
                                    .to(routes::send_contact)
                                    .wrap(from_fn(rate_limit::limit_contact_attempts)),
                            )
                            .route("/test", web::get().to(routes::contact_test)),
                    )
                    .route("/health", web::get().to(routes::health_check))
                    .route("/download/resume", web::get().to(routes::download_resume))
                    .route("/video/{filename}", web::get().to(routes::stream_video)),
            )
            .configure(|cfg| {
                // Registered last so API routes win
                if environment.is_development() {
                    cfg.service(routes::frontend_files(&frontend_dir));
                }
            })
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}

/// One CORS policy for every deployment: the configured allow-list, or any
/// origin in development. Requests without an `Origin` header pass through.
fn build_cors(settings: &CorsSettings, environment: Environment) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600);

    if environment.is_development() {
        return cors.allow_any_origin();
    }

    settings
        .origins()
        .into_iter()
        .filter(|origin| {
            // `Cors::allowed_origin` panics on a wildcard
            if *origin == "*" {
                tracing::warn!("Ignoring wildcard CORS origin in production");
                return false;
            }
            true
        })
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// Unparseable bodies get the same answer as incomplete ones.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::info!("Rejected contact body: {}", err);
        InternalError::from_response(
            err,
            utils::json_failure(StatusCode::BAD_REQUEST, ALL_FIELDS_REQUIRED),
        )
        .into()
    })
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        tracing::info!("Rejected contact form: {}", err);
        InternalError::from_response(
            err,
            utils::json_failure(StatusCode::BAD_REQUEST, ALL_FIELDS_REQUIRED),
        )
        .into()
    })
}
