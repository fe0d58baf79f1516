#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::{net::SocketAddr, sync::Arc};

use cau_menu::{
    render::ChromeFactory,
    slack::{self, AppState, SlackClient},
    Config, MenuResolver,
};
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Arc::new(Config::from_env()?);
    if config.slack_bot_token.is_none() {
        log::warn!("env var SLACK_BOT_TOKEN not set, only command and button replies will work.");
    }
    match (&config.api_url, &config.website_url) {
        (Some(api), _) => log::info!("menus come from the api at {api}"),
        (None, Some(site)) => log::info!("menus are scraped from {site}"),
        (None, None) => log::warn!("no menu source configured, serving the sample menus."),
    }

    let resolver = MenuResolver::new(Arc::clone(&config), ChromeFactory::from_config(&config));
    let state = Arc::new(AppState {
        source: Arc::new(resolver),
        slack: SlackClient::new(config.slack_bot_token.clone()),
    });

    let compression_layer: CompressionLayer = CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true);
    let app = slack::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(compression_layer);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to listen on {addr}: {e}"));
    log::info!("listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("could not listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
