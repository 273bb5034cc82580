//! API endpoint handlers.
//!
//! Each module backs one dashboard panel. Handlers load the record set,
//! call into `crate::engine` and return the aggregate as JSON.

pub mod dashboard;
pub mod distributions;
pub mod health;
pub mod kpis;
pub mod records;
pub mod timeline;
