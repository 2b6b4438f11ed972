use std::sync::Arc;

use crate::config::{Config, LogFormat};
use linkboard_preview::{LinkPreviewProvider, MetadataResolver, OpenGraphProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub link_preview: Arc<MetadataResolver>,
    pub opengraph: Arc<MetadataResolver>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let link_preview = MetadataResolver::new(
        Arc::new(LinkPreviewProvider::with_base_url(
            config.link_preview.api_url.as_str(),
        )),
        config.resolver_config(&config.link_preview),
    );
    let opengraph = MetadataResolver::new(
        Arc::new(OpenGraphProvider::with_base_url(
            config.opengraph.api_url.as_str(),
        )),
        config.resolver_config(&config.opengraph),
    );

    tracing::info!(
        "Upstream deadline {:?}, max attempts {}",
        config.upstream_timeout,
        config.upstream_max_attempts
    );

    Arc::new(AppState {
        link_preview: Arc::new(link_preview),
        opengraph: Arc::new(opengraph),
    })
}
