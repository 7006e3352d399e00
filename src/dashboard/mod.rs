//! The dashboard: aggregation of the transaction list and the single page
//! that presents it.

pub mod aggregation;
mod charts;
mod figures;
mod forms;
mod handlers;
mod tree;

pub use handlers::{DashboardState, get_dashboard_page, switch_currency};
