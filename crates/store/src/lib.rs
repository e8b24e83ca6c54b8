pub mod fixtures;
pub mod repositories;

pub use fixtures::ShowroomSeed;
pub use repositories::{
    CatalogRepository, InMemoryCatalogRepository, InMemoryOrderRepository, OrderRepository,
    RepositoryError,
};
