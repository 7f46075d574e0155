use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;
use serde::Deserialize;

use crate::connector::api::{ApiError, ApiResult};
use crate::{DomainError, NewOrder, Order, OrderService, OrderUpdate};

use super::super::Container;

const ORDER_NOT_FOUND: &str = "Pedido no encontrado";

fn order_not_found() -> ApiError {
    DomainError::not_found(ORDER_NOT_FOUND).into()
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub user_id: Option<String>,
}

#[derive(Clone)]
pub struct OrderController {
    service: Arc<OrderService>,
}

impl OrderController {
    pub fn new(container: &Container) -> Self {
        Self {
            service: container.order_service(),
        }
    }

    pub fn routes(self) -> axum::Router {
        axum::Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route(
                "/orders/{order_id}",
                get(get_order).put(update_order).delete(delete_order),
            )
            .with_state(self)
    }
}

async fn create_order(
    State(controller): State<OrderController>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let Json(new_order) = payload?;
    let order = controller.service.create(new_order).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn list_orders(
    State(controller): State<OrderController>,
    query: Result<Query<OrderListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Order>>> {
    let Query(query) = query?;
    let orders = match query.user_id {
        Some(user_id) => controller.service.list_by_user(&user_id).await?,
        None => controller.service.list().await?,
    };
    Ok(Json(orders))
}

async fn get_order(
    State(controller): State<OrderController>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<Order>> {
    controller
        .service
        .get(&order_id)
        .await?
        .map(Json)
        .ok_or_else(order_not_found)
}

async fn update_order(
    State(controller): State<OrderController>,
    Path(order_id): Path<String>,
    payload: Result<Json<OrderUpdate>, JsonRejection>,
) -> ApiResult<Json<Order>> {
    let Json(update) = payload?;
    controller
        .service
        .update(&order_id, &update)
        .await?
        .map(Json)
        .ok_or_else(order_not_found)
}

async fn delete_order(
    State(controller): State<OrderController>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    if controller.service.delete(&order_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(order_not_found())
    }
}
