//! Page handlers and their route registrations.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use chrono::Utc;

use crate::http::response::{client_error, server_error};
use crate::render::{render_json, render_template, IndexPage, ItemPage};
use crate::routing::{param, RouteError, RouteTable};
use crate::store::ItemSource;

/// State shared by the page handlers.
#[derive(Clone)]
pub struct WebState {
    pub items: Arc<dyn ItemSource>,
}

/// Register every page route on `table`.
pub fn register_routes(table: &mut RouteTable, state: Arc<WebState>) -> Result<(), RouteError> {
    let s = state.clone();
    table.register(Method::GET, "/", move |req| index(s.clone(), req))?;

    let s = state.clone();
    table.register(Method::GET, "/items/([0-9]+)", move |req| {
        item_detail(s.clone(), req)
    })?;

    let s = state;
    table.register(Method::GET, "/api/items", move |req| items_json(s.clone(), req))?;

    Ok(())
}

/// The index page: every stored item.
pub async fn index(state: Arc<WebState>, req: Request) -> Response {
    let items = match state.items.items().await {
        Ok(items) => items,
        Err(e) => return server_error(&req, &e),
    };

    render_template(&req, StatusCode::OK, &IndexPage::new(&items, Utc::now()))
}

/// A single item, addressed by the id captured from the path.
pub async fn item_detail(state: Arc<WebState>, req: Request) -> Response {
    let Ok(id) = param(&req, 0).parse::<i64>() else {
        return client_error(StatusCode::NOT_FOUND);
    };

    match state.items.item(id).await {
        Ok(Some(item)) => render_template(&req, StatusCode::OK, &ItemPage::new(&item, Utc::now())),
        Ok(None) => client_error(StatusCode::NOT_FOUND),
        Err(e) => server_error(&req, &e),
    }
}

/// Every stored item as JSON.
pub async fn items_json(state: Arc<WebState>, req: Request) -> Response {
    match state.items.items().await {
        Ok(items) => render_json(&req, StatusCode::OK, &items),
        Err(e) => server_error(&req, &e),
    }
}
