//! Page templates and their view models.

use askama::Template;
use chrono::{DateTime, Utc};

use super::human_date;
use crate::model::Item;

/// An item prepared for display.
#[derive(Debug, Clone)]
pub struct ItemView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created: String,
}

impl ItemView {
    pub fn new(item: &Item, now: DateTime<Utc>) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            created: human_date(item.created, now),
        }
    }
}

/// The item list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub items: Vec<ItemView>,
}

impl IndexPage {
    pub fn new(items: &[Item], now: DateTime<Utc>) -> Self {
        Self {
            items: items.iter().map(|item| ItemView::new(item, now)).collect(),
        }
    }
}

/// A single item.
#[derive(Template)]
#[template(path = "item.html")]
pub struct ItemPage {
    pub item: ItemView,
}

impl ItemPage {
    pub fn new(item: &Item, now: DateTime<Utc>) -> Self {
        Self {
            item: ItemView::new(item, now),
        }
    }
}
