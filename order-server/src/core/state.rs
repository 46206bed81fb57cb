//! Server state
//!
//! Shared handles for every request: configuration, the database pool, the
//! product catalog, and the invoice mailer. Cloning is shallow (Arc / pool
//! handles), so axum can clone the state per request cheaply.

use std::sync::Arc;

use crate::core::Config;
use crate::db::DbService;
use crate::invoice::InvoiceMailer;
use crate::services::Catalog;
use crate::utils::AppError;

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub catalog: Arc<Catalog>,
    pub mailer: Arc<InvoiceMailer>,
}

impl ServerState {
    /// Open the database, load the catalog, and build the mailer
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        let mailer = InvoiceMailer::new(config)
            .map_err(|e| AppError::internal(e.to_string()))?;

        if config.mail_api_key.is_empty() {
            tracing::warn!("MAIL_API_KEY is empty; invoice emails will fail until configured");
        }

        Ok(Self {
            config: Arc::new(config.clone()),
            db,
            catalog: Arc::new(catalog),
            mailer: Arc::new(mailer),
        })
    }
}
