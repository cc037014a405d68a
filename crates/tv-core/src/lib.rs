pub mod catalog;
pub mod config;
pub mod navigator;
pub mod organizer;
pub mod platform;
pub mod preferences;
pub mod selection;
pub mod session;

pub use catalog::{Catalog, CatalogError, Category, Channel, ALL_CATEGORY};
pub use session::{Display, FilterState, Session};
