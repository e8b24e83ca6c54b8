//! Order endpoints.
//!
//! - `GET  /orders`              — open orders, enriched with catalog details
//! - `GET  /orders/{id}`         — single order by id, enriched
//! - `POST /orders`              — create an order from catalog selections
//! - `POST /orders/{id}/fulfill` — mark an order fulfilled
//!
//! Foreign keys are not validated against the catalog on create; a reference
//! that does not resolve stays null in the enriched read model and adds
//! nothing to the total. Unknown order ids surface as 404 with an empty body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, header::HeaderName, StatusCode},
    routing::{get, post},
    Json, Router,
};
use buildsheet_core::domain::order::{Order, OrderDetail, OrderDraft, OrderId};
use buildsheet_store::repositories::{CatalogRepository, OrderRepository, RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrdersState {
    catalog: Arc<dyn CatalogRepository>,
    orders: Arc<dyn OrderRepository>,
}

pub fn router(catalog: Arc<dyn CatalogRepository>, orders: Arc<dyn OrderRepository>) -> Router {
    Router::new()
        .route("/orders", get(list_open_orders).post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/fulfill", post(fulfill_order))
        .with_state(OrdersState { catalog, orders })
}

async fn list_open_orders(
    State(state): State<OrdersState>,
) -> Result<Json<Vec<OrderDetail>>, StatusCode> {
    let orders = state.orders.list().await.map_err(storage_error)?;

    let mut details = Vec::with_capacity(orders.len());
    for order in orders.iter().filter(|order| order.is_open()) {
        details.push(resolve_detail(&state, order).await?);
    }

    Ok(Json(details))
}

async fn get_order(
    Path(id): Path<i64>,
    State(state): State<OrdersState>,
) -> Result<Json<OrderDetail>, StatusCode> {
    let order = state
        .orders
        .find_by_id(&OrderId(id))
        .await
        .map_err(storage_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    resolve_detail(&state, &order).await.map(Json)
}

async fn create_order(
    State(state): State<OrdersState>,
    Json(draft): Json<OrderDraft>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<OrderDetail>), StatusCode> {
    let order = state.orders.create(draft).await.map_err(storage_error)?;

    info!(
        event_name = "orders.created",
        order_id = order.id.0,
        wheel_id = order.wheel_id.0,
        technology_id = order.technology_id.0,
        paint_id = order.paint_id.0,
        interior_id = order.interior_id.0,
        "order created"
    );

    let location = format!("/orders/{}", order.id.0);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(OrderDetail::created(&order))))
}

async fn fulfill_order(
    Path(id): Path<i64>,
    State(state): State<OrdersState>,
) -> Result<StatusCode, StatusCode> {
    let fulfilled = state.orders.mark_fulfilled(&OrderId(id)).await.map_err(storage_error)?;
    if !fulfilled {
        return Err(StatusCode::NOT_FOUND);
    }

    info!(event_name = "orders.fulfilled", order_id = id, "order marked fulfilled");

    Ok(StatusCode::NO_CONTENT)
}

async fn resolve_detail(state: &OrdersState, order: &Order) -> Result<OrderDetail, StatusCode> {
    let wheels = state.catalog.find_wheels(&order.wheel_id).await.map_err(storage_error)?;
    let technology =
        state.catalog.find_technology(&order.technology_id).await.map_err(storage_error)?;
    let paint = state.catalog.find_paint_color(&order.paint_id).await.map_err(storage_error)?;
    let interior = state.catalog.find_interior(&order.interior_id).await.map_err(storage_error)?;

    Ok(OrderDetail::assemble(order, wheels, technology, paint, interior))
}

fn storage_error(error: RepositoryError) -> StatusCode {
    error!(error = %error, "order storage error");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        Json,
    };
    use buildsheet_core::domain::catalog::{InteriorId, PaintColorId, TechnologyId, WheelId};
    use buildsheet_core::domain::order::OrderDraft;
    use buildsheet_store::fixtures::ShowroomSeed;
    use rust_decimal::Decimal;

    use super::{create_order, fulfill_order, get_order, list_open_orders, OrdersState};

    fn state() -> OrdersState {
        OrdersState {
            catalog: Arc::new(ShowroomSeed::catalog()),
            orders: Arc::new(ShowroomSeed::order_store()),
        }
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            wheel_id: WheelId(1),
            technology_id: TechnologyId(2),
            paint_id: PaintColorId(3),
            interior_id: InteriorId(4),
        }
    }

    #[tokio::test]
    async fn get_order_returns_not_found_for_unknown_id() {
        let result = get_order(Path(9999), State(state())).await;

        assert!(matches!(result, Err(StatusCode::NOT_FOUND)));
    }

    #[tokio::test]
    async fn seed_order_detail_resolves_all_references_and_totals() {
        let Json(detail) = get_order(Path(1), State(state())).await.expect("get order");

        assert_eq!(detail.id.0, 1);
        assert!(!detail.completed);
        assert_eq!(detail.wheels.as_ref().expect("wheels").style, "17-inch Pair Radial");
        assert_eq!(
            detail.technology.as_ref().expect("technology").package,
            "Navigation Package (includes integrated navigation controls)"
        );
        assert_eq!(detail.paint.as_ref().expect("paint").color, "Firebrick Red");
        assert_eq!(detail.interior.as_ref().expect("interior").material, "Black Leather");
        assert_eq!(detail.total_cost, Decimal::new(139996, 2));
    }

    #[tokio::test]
    async fn unresolved_reference_yields_null_detail_and_partial_total() {
        let state = state();
        let bad_draft = OrderDraft { wheel_id: WheelId(999), ..draft() };
        let (_, _, Json(created)) =
            create_order(State(state.clone()), Json(bad_draft)).await.expect("create order");

        let Json(detail) =
            get_order(Path(created.id.0), State(state)).await.expect("get created order");

        assert!(detail.wheels.is_none());
        assert_eq!(
            detail.total_cost,
            Decimal::new(39999, 2) + Decimal::new(18999, 2) + Decimal::new(10999, 2)
        );
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_echoes_foreign_keys_without_details() {
        let state = state();

        let (status, [(_, location)], Json(first)) =
            create_order(State(state.clone()), Json(draft())).await.expect("create first");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(location, "/orders/2");
        assert_eq!(first.id.0, 2);
        assert_eq!(first.wheel_id, WheelId(1));
        assert!(first.wheels.is_none());
        assert!(first.technology.is_none());
        assert!(first.paint.is_none());
        assert!(first.interior.is_none());
        assert_eq!(first.total_cost, Decimal::ZERO);
        assert!(!first.completed);

        let (_, _, Json(second)) =
            create_order(State(state), Json(draft())).await.expect("create second");
        assert_eq!(second.id.0, 3);
    }

    #[tokio::test]
    async fn open_orders_listing_excludes_fulfilled_orders() {
        let state = state();

        let Json(before) = list_open_orders(State(state.clone())).await.expect("list before");
        assert_eq!(before.len(), 1);

        let status = fulfill_order(Path(1), State(state.clone())).await.expect("fulfill");
        assert_eq!(status, StatusCode::NO_CONTENT);

        let Json(after) = list_open_orders(State(state)).await.expect("list after");
        assert!(after.is_empty());
    }

    #[tokio::test]
    async fn fulfill_is_idempotent_and_unknown_ids_are_not_found() {
        let state = state();

        assert_eq!(
            fulfill_order(Path(1), State(state.clone())).await.expect("first fulfill"),
            StatusCode::NO_CONTENT
        );
        assert_eq!(
            fulfill_order(Path(1), State(state.clone())).await.expect("second fulfill"),
            StatusCode::NO_CONTENT
        );
        assert!(matches!(fulfill_order(Path(9999), State(state)).await, Err(StatusCode::NOT_FOUND)));
    }

    #[tokio::test]
    async fn fulfilled_orders_remain_fetchable_by_id() {
        let state = state();

        fulfill_order(Path(1), State(state.clone())).await.expect("fulfill");
        let Json(detail) = get_order(Path(1), State(state)).await.expect("get order");

        assert!(detail.completed);
    }
}
