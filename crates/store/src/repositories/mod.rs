use async_trait::async_trait;
use thiserror::Error;

use buildsheet_core::domain::catalog::{
    Interior, InteriorId, PaintColor, PaintColorId, Technology, TechnologyId, WheelId, Wheels,
};
use buildsheet_core::domain::order::{Order, OrderDraft, OrderId};

pub mod memory;

pub use memory::{InMemoryCatalogRepository, InMemoryOrderRepository};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Read-only access to the option catalog. Collections preserve seed order.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_wheels(&self) -> Result<Vec<Wheels>, RepositoryError>;
    async fn list_interiors(&self) -> Result<Vec<Interior>, RepositoryError>;
    async fn list_technologies(&self) -> Result<Vec<Technology>, RepositoryError>;
    async fn list_paint_colors(&self) -> Result<Vec<PaintColor>, RepositoryError>;

    async fn find_wheels(&self, id: &WheelId) -> Result<Option<Wheels>, RepositoryError>;
    async fn find_interior(&self, id: &InteriorId) -> Result<Option<Interior>, RepositoryError>;
    async fn find_technology(&self, id: &TechnologyId)
        -> Result<Option<Technology>, RepositoryError>;
    async fn find_paint_color(&self, id: &PaintColorId)
        -> Result<Option<PaintColor>, RepositoryError>;
}

/// Order storage. The repository owns identifier assignment and the
/// fulfillment transition so backends stay swappable.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Persist a draft as a new open order with a freshly assigned id and
    /// creation timestamp.
    async fn create(&self, draft: OrderDraft) -> Result<Order, RepositoryError>;

    /// Mark an order fulfilled in place. Returns `false` when the id is
    /// unknown. Re-fulfilling a completed order succeeds.
    async fn mark_fulfilled(&self, id: &OrderId) -> Result<bool, RepositoryError>;
}
