//! Transactions: the core data models, the endpoints for creating and
//! deleting them, and the category list partial.

mod categories_endpoint;
mod core;
mod create_endpoint;
mod delete_endpoint;

pub use categories_endpoint::{category_options, get_category_options};
pub use core::{
    EXPENSE_CATEGORIES, INCOME_CATEGORIES, NewTransaction, Transaction, TransactionId,
    TransactionKind,
};
pub use create_endpoint::create_transaction;
pub use delete_endpoint::delete_transaction;
