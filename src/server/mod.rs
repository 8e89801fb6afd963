//! HTTP API server
//!
//! Wires the analysis service into an axum application with optional CORS
//! and request-trace layers, and owns server startup/shutdown.

pub mod api;

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::news::{GnewsClient, NewsApiClient, NewsFetcher};
use crate::sentiment::Lexicon;
use crate::service::AnalysisService;
use crate::storage::SharedAnalysisRepository;

use api::create_router;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analysis workflow entry point
    pub service: Arc<AnalysisService>,

    /// Server start time, for uptime reporting
    pub start_time: Instant,
}

/// The API server
pub struct ApiServer {
    config: Config,
    state: AppState,
}

impl ApiServer {
    /// Assemble the server from configuration and a repository
    ///
    /// The lexicon is constructed once here and shared with every request.
    pub fn new(config: Config, repository: SharedAnalysisRepository) -> Result<Self> {
        config.validate().map_err(crate::error::Error::from)?;

        let timeout = config.request_timeout();
        let primary = NewsApiClient::with_base_url(
            config.providers.news_api_key.clone(),
            config.providers.news_api_url.clone(),
            timeout,
        )?;
        let fallback = GnewsClient::with_base_url(
            config.providers.gnews_api_key.clone(),
            config.providers.gnews_api_url.clone(),
            timeout,
        )?;

        let fetcher = NewsFetcher::new(Box::new(primary), Box::new(fallback));
        let service = Arc::new(AnalysisService::new(
            Arc::new(Lexicon::afinn()),
            fetcher,
            repository,
        ));

        Ok(Self {
            config,
            state: AppState {
                service,
                start_time: Instant::now(),
            },
        })
    }

    /// Get the application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Build the router with all routes and configured layers
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        if self.config.server.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        if self.config.server.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Start the server with graceful shutdown
    pub async fn start_with_shutdown(
        &self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let router = self.build_router();
        let addr = self.config.server.bind_address;

        tracing::info!("starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        tracing::info!("API server shutdown complete");
        Ok(())
    }

    /// Start the server without a shutdown signal
    pub async fn start(&self) -> Result<()> {
        let router = self.build_router();
        let addr = self.config.server.bind_address;

        tracing::info!("starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
