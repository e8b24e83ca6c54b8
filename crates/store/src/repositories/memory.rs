use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use buildsheet_core::domain::catalog::{
    Interior, InteriorId, PaintColor, PaintColorId, Technology, TechnologyId, WheelId, Wheels,
};
use buildsheet_core::domain::order::{Order, OrderDraft, OrderId};

use super::{CatalogRepository, OrderRepository, RepositoryError};

/// Catalog collections are immutable once seeded, so no lock is needed.
pub struct InMemoryCatalogRepository {
    wheels: Vec<Wheels>,
    interiors: Vec<Interior>,
    technologies: Vec<Technology>,
    paint_colors: Vec<PaintColor>,
}

impl InMemoryCatalogRepository {
    pub fn new(
        wheels: Vec<Wheels>,
        interiors: Vec<Interior>,
        technologies: Vec<Technology>,
        paint_colors: Vec<PaintColor>,
    ) -> Self {
        Self { wheels, interiors, technologies, paint_colors }
    }
}

#[async_trait::async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_wheels(&self) -> Result<Vec<Wheels>, RepositoryError> {
        Ok(self.wheels.clone())
    }

    async fn list_interiors(&self) -> Result<Vec<Interior>, RepositoryError> {
        Ok(self.interiors.clone())
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>, RepositoryError> {
        Ok(self.technologies.clone())
    }

    async fn list_paint_colors(&self) -> Result<Vec<PaintColor>, RepositoryError> {
        Ok(self.paint_colors.clone())
    }

    async fn find_wheels(&self, id: &WheelId) -> Result<Option<Wheels>, RepositoryError> {
        Ok(self.wheels.iter().find(|entry| entry.id == *id).cloned())
    }

    async fn find_interior(&self, id: &InteriorId) -> Result<Option<Interior>, RepositoryError> {
        Ok(self.interiors.iter().find(|entry| entry.id == *id).cloned())
    }

    async fn find_technology(
        &self,
        id: &TechnologyId,
    ) -> Result<Option<Technology>, RepositoryError> {
        Ok(self.technologies.iter().find(|entry| entry.id == *id).cloned())
    }

    async fn find_paint_color(
        &self,
        id: &PaintColorId,
    ) -> Result<Option<PaintColor>, RepositoryError> {
        Ok(self.paint_colors.iter().find(|entry| entry.id == *id).cloned())
    }
}

pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
    next_id: AtomicI64,
}

impl InMemoryOrderRepository {
    /// The id counter starts past the highest seeded id, or at 1 for an
    /// empty collection, so creation is total.
    pub fn new(orders: Vec<Order>) -> Self {
        let next_id = orders.iter().map(|order| order.id.0).max().unwrap_or(0) + 1;
        Self { orders: RwLock::new(orders), next_id: AtomicI64::new(next_id) }
    }
}

#[async_trait::async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.orders.read().await;
        Ok(orders.clone())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|order| order.id == *id).cloned())
    }

    async fn create(&self, draft: OrderDraft) -> Result<Order, RepositoryError> {
        let order = Order {
            id: OrderId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            time_stamp: Utc::now(),
            wheel_id: draft.wheel_id,
            technology_id: draft.technology_id,
            paint_id: draft.paint_id,
            interior_id: draft.interior_id,
            completed: false,
        };

        let mut orders = self.orders.write().await;
        orders.push(order.clone());

        Ok(order)
    }

    async fn mark_fulfilled(&self, id: &OrderId) -> Result<bool, RepositoryError> {
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|order| order.id == *id) {
            Some(order) => {
                order.fulfill();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use buildsheet_core::domain::catalog::{InteriorId, PaintColorId, TechnologyId, WheelId};
    use buildsheet_core::domain::order::{OrderDraft, OrderId};

    use crate::fixtures::ShowroomSeed;
    use crate::repositories::{CatalogRepository, OrderRepository};

    use super::InMemoryOrderRepository;

    fn draft() -> OrderDraft {
        OrderDraft {
            wheel_id: WheelId(1),
            technology_id: TechnologyId(2),
            paint_id: PaintColorId(3),
            interior_id: InteriorId(4),
        }
    }

    #[tokio::test]
    async fn catalog_lists_preserve_seed_order() {
        let catalog = ShowroomSeed::catalog();

        let wheels = catalog.list_wheels().await.expect("list wheels");
        assert_eq!(wheels.iter().map(|entry| entry.id.0).collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        let interiors = catalog.list_interiors().await.expect("list interiors");
        assert_eq!(interiors.iter().map(|entry| entry.id.0).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn catalog_find_misses_return_none() {
        let catalog = ShowroomSeed::catalog();

        assert!(catalog.find_wheels(&WheelId(999)).await.expect("find wheels").is_none());
        assert!(catalog
            .find_paint_color(&PaintColorId(999))
            .await
            .expect("find paint")
            .is_none());
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_past_the_seed_maximum() {
        let repo = ShowroomSeed::order_store();

        let first = repo.create(draft()).await.expect("create first");
        let second = repo.create(draft()).await.expect("create second");

        assert_eq!(first.id, OrderId(2));
        assert_eq!(second.id, OrderId(3));
        assert!(!first.completed);
    }

    #[tokio::test]
    async fn create_on_an_empty_store_assigns_id_one() {
        let repo = InMemoryOrderRepository::new(Vec::new());

        let order = repo.create(draft()).await.expect("create");

        assert_eq!(order.id, OrderId(1));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = ShowroomSeed::order_store();
        repo.create(draft()).await.expect("create");

        let orders = repo.list().await.expect("list");

        assert_eq!(orders.iter().map(|order| order.id.0).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn mark_fulfilled_is_idempotent_and_reports_unknown_ids() {
        let repo = ShowroomSeed::order_store();

        assert!(repo.mark_fulfilled(&OrderId(1)).await.expect("first fulfill"));
        assert!(repo.mark_fulfilled(&OrderId(1)).await.expect("second fulfill"));
        assert!(!repo.mark_fulfilled(&OrderId(9999)).await.expect("unknown fulfill"));

        let order = repo.find_by_id(&OrderId(1)).await.expect("find").expect("present");
        assert!(order.completed);
    }

    #[tokio::test]
    async fn find_by_id_misses_return_none() {
        let repo = ShowroomSeed::order_store();

        assert!(repo.find_by_id(&OrderId(9999)).await.expect("find").is_none());
    }
}
