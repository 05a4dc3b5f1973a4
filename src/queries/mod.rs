//! Query interfaces over the storefront transport.
//!
//! Each module provides a query struct that borrows a
//! [`StoreClient`](crate::client::StoreClient) and exposes the aggregation
//! operations. Queries hold no state of their own; every call is an
//! independent fetch.

pub mod apps;
pub mod dlc;

pub use apps::AppQuery;
pub use dlc::DlcQuery;
