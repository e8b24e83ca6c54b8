use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{
    Interior, InteriorId, PaintColor, PaintColorId, Technology, TechnologyId, WheelId, Wheels,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i64);

/// A customer configuration order. Foreign keys are recorded as submitted and
/// are not checked against the catalog at write time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub time_stamp: DateTime<Utc>,
    pub wheel_id: WheelId,
    pub technology_id: TechnologyId,
    pub paint_id: PaintColorId,
    pub interior_id: InteriorId,
    pub completed: bool,
}

impl Order {
    pub fn is_open(&self) -> bool {
        !self.completed
    }

    /// Completed is terminal; fulfilling an already-completed order is a no-op.
    pub fn fulfill(&mut self) {
        self.completed = true;
    }
}

/// The caller-supplied portion of a new order. Any id, timestamp, or
/// completion flag in the request payload is ignored and regenerated
/// server-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub wheel_id: WheelId,
    pub technology_id: TechnologyId,
    pub paint_id: PaintColorId,
    pub interior_id: InteriorId,
}

/// Read model for an order enriched with the catalog entries its foreign
/// keys resolve to. An unresolved reference stays `None` on the wire and
/// contributes nothing to `total_cost`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: OrderId,
    pub time_stamp: DateTime<Utc>,
    pub wheel_id: WheelId,
    pub technology_id: TechnologyId,
    pub paint_id: PaintColorId,
    pub interior_id: InteriorId,
    pub completed: bool,
    pub wheels: Option<Wheels>,
    pub technology: Option<Technology>,
    pub paint: Option<PaintColor>,
    pub interior: Option<Interior>,
    pub total_cost: Decimal,
}

impl OrderDetail {
    pub fn assemble(
        order: &Order,
        wheels: Option<Wheels>,
        technology: Option<Technology>,
        paint: Option<PaintColor>,
        interior: Option<Interior>,
    ) -> Self {
        let total_cost = wheels.as_ref().map(|w| w.price).unwrap_or(Decimal::ZERO)
            + technology.as_ref().map(|t| t.price).unwrap_or(Decimal::ZERO)
            + paint.as_ref().map(|p| p.price).unwrap_or(Decimal::ZERO)
            + interior.as_ref().map(|i| i.price).unwrap_or(Decimal::ZERO);

        Self {
            id: order.id,
            time_stamp: order.time_stamp,
            wheel_id: order.wheel_id,
            technology_id: order.technology_id,
            paint_id: order.paint_id,
            interior_id: order.interior_id,
            completed: order.completed,
            wheels,
            technology,
            paint,
            interior,
            total_cost,
        }
    }

    /// Creation echo: identifying fields only, nested details left unresolved.
    pub fn created(order: &Order) -> Self {
        Self::assemble(order, None, None, None, None)
    }
}
