use actix_web::{middleware, web, App, HttpServer};

use apikey_auth::config;
use apikey_auth::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env().map_err(|e| {
        log::error!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!("Starting apikey-auth server on {}:{}", config.host, config.port);

    let server = HttpServer::new(|| {
        App::new()
            // Access log format has no Authorization field
            .wrap(middleware::Logger::default())
            .configure(routes::health::configure)
            .configure(routes::key::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .shutdown_timeout(30)
    .run();

    let server_handle = server.handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        log::info!("Stopping apikey-auth server");
        server_handle.stop(true).await;
    });

    server.await
}

/// Resolves on Ctrl+C, or on SIGTERM where available
async fn shutdown_signal() {
    tokio::select! {
        _ = ctrl_c() => {},
        _ = terminate() => {},
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Ctrl+C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            log::error!("SIGTERM handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await
}
