//! Canonical showroom dataset seeded into the in-memory stores at startup.
//!
//! The catalog carries four entries per option family and one open order
//! referencing one entry from each, so a fresh process always has data to
//! serve and a known order to fulfill.

use chrono::Utc;
use rust_decimal::Decimal;

use buildsheet_core::domain::catalog::{
    Interior, InteriorId, PaintColor, PaintColorId, Technology, TechnologyId, WheelId, Wheels,
};
use buildsheet_core::domain::order::{Order, OrderId};

use crate::repositories::{InMemoryCatalogRepository, InMemoryOrderRepository};

pub struct ShowroomSeed;

impl ShowroomSeed {
    pub fn wheels() -> Vec<Wheels> {
        vec![
            Wheels {
                id: WheelId(1),
                price: Decimal::new(69999, 2),
                style: "17-inch Pair Radial".to_string(),
            },
            Wheels {
                id: WheelId(2),
                price: Decimal::new(49999, 2),
                style: "17-inch Pair Radial Black".to_string(),
            },
            Wheels {
                id: WheelId(3),
                price: Decimal::new(89999, 2),
                style: "18-inch Pair Spoke Silver".to_string(),
            },
            Wheels {
                id: WheelId(4),
                price: Decimal::new(99999, 2),
                style: "18-inch Pair Spoke Black".to_string(),
            },
        ]
    }

    pub fn interiors() -> Vec<Interior> {
        vec![
            Interior {
                id: InteriorId(1),
                price: Decimal::new(19999, 2),
                material: "Beige Fabric".to_string(),
            },
            Interior {
                id: InteriorId(2),
                price: Decimal::new(11999, 2),
                material: "Charcoal Fabric".to_string(),
            },
            Interior {
                id: InteriorId(3),
                price: Decimal::new(18999, 2),
                material: "White Leather".to_string(),
            },
            Interior {
                id: InteriorId(4),
                price: Decimal::new(10999, 2),
                material: "Black Leather".to_string(),
            },
        ]
    }

    pub fn technologies() -> Vec<Technology> {
        vec![
            Technology {
                id: TechnologyId(1),
                price: Decimal::new(19999, 2),
                package: "Basic Package (basic sound system)".to_string(),
            },
            Technology {
                id: TechnologyId(2),
                price: Decimal::new(39999, 2),
                package: "Navigation Package (includes integrated navigation controls)".to_string(),
            },
            Technology {
                id: TechnologyId(3),
                price: Decimal::new(28999, 2),
                package: "Visibility Package (includes side and rear cameras)".to_string(),
            },
            Technology {
                id: TechnologyId(4),
                price: Decimal::new(99999, 2),
                package: "Ultra Package (includes navigation and visibility packages)".to_string(),
            },
        ]
    }

    pub fn paint_colors() -> Vec<PaintColor> {
        vec![
            PaintColor {
                id: PaintColorId(1),
                price: Decimal::new(12499, 2),
                color: "Silver".to_string(),
            },
            PaintColor {
                id: PaintColorId(2),
                price: Decimal::new(16999, 2),
                color: "Midnight Blue".to_string(),
            },
            PaintColor {
                id: PaintColorId(3),
                price: Decimal::new(18999, 2),
                color: "Firebrick Red".to_string(),
            },
            PaintColor {
                id: PaintColorId(4),
                price: Decimal::new(19999, 2),
                color: "Spring Green".to_string(),
            },
        ]
    }

    pub fn orders() -> Vec<Order> {
        vec![Order {
            id: OrderId(1),
            time_stamp: Utc::now(),
            wheel_id: WheelId(1),
            technology_id: TechnologyId(2),
            paint_id: PaintColorId(3),
            interior_id: InteriorId(4),
            completed: false,
        }]
    }

    pub fn catalog() -> InMemoryCatalogRepository {
        InMemoryCatalogRepository::new(
            Self::wheels(),
            Self::interiors(),
            Self::technologies(),
            Self::paint_colors(),
        )
    }

    pub fn order_store() -> InMemoryOrderRepository {
        InMemoryOrderRepository::new(Self::orders())
    }
}
