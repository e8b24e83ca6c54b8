use std::sync::Arc;

use axum::Router;
use buildsheet_core::config::{AppConfig, ConfigError, LoadOptions};
use buildsheet_store::fixtures::ShowroomSeed;
use buildsheet_store::repositories::{CatalogRepository, OrderRepository};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub catalog: Arc<dyn CatalogRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    Ok(bootstrap_with_config(config))
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let catalog: Arc<dyn CatalogRepository> = Arc::new(ShowroomSeed::catalog());
    let orders: Arc<dyn OrderRepository> = Arc::new(ShowroomSeed::order_store());

    info!(event_name = "system.bootstrap.seeded", "catalog and order stores seeded");

    Application { config, catalog, orders }
}

impl Application {
    pub fn router(&self) -> Router {
        Router::new()
            .merge(crate::catalog::router(self.catalog.clone()))
            .merge(crate::orders::router(self.catalog.clone(), self.orders.clone()))
            .merge(crate::health::router())
            .layer(cors_layer(&self.config.server.cors_origins))
    }
}

// No origins configured means the permissive development posture.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|origin| origin.parse().ok()).collect();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use buildsheet_core::config::{ConfigOverrides, LoadOptions};
    use buildsheet_core::domain::order::OrderId;
    use buildsheet_store::repositories::{CatalogRepository, OrderRepository};

    use super::bootstrap;

    #[tokio::test]
    async fn bootstrap_seeds_catalog_and_order_stores() {
        let app = bootstrap(LoadOptions::default()).expect("bootstrap should succeed");

        let wheels = app.catalog.list_wheels().await.expect("list wheels");
        assert_eq!(wheels.len(), 4);

        let order =
            app.orders.find_by_id(&OrderId(1)).await.expect("find order").expect("seed order");
        assert!(order.is_open());
    }

    #[tokio::test]
    async fn bootstrap_fails_fast_on_invalid_overrides() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                log_level: Some("shouting".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        assert!(result.is_err());
        let message = result.err().expect("error").to_string();
        assert!(message.contains("logging.level"));
    }
}
