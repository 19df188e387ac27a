//! Domain types shared by the store, service and web layers.

pub mod item;

pub use item::Item;
