pub mod config;
pub mod domain;

pub use domain::catalog::{
    Interior, InteriorId, PaintColor, PaintColorId, Technology, TechnologyId, WheelId, Wheels,
};
pub use domain::order::{Order, OrderDetail, OrderDraft, OrderId};
