//! Defines the core data models for transactions.

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// The ID the backend assigns to a transaction.
pub type TransactionId = i64;

/// Whether a transaction earns or spends money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned; stored with a positive amount.
    Income,
    /// Money spent; stored with a negative amount.
    Expense,
}

/// The category labels offered for income transactions.
pub const INCOME_CATEGORIES: [&str; 4] = ["Salary", "Rent", "Investment", "Other"];

/// The category labels offered for expense transactions.
pub const EXPENSE_CATEGORIES: [&str; 11] = [
    "Rent",
    "Restaurant",
    "Transport",
    "Groceries",
    "Leisure",
    "Clothes",
    "Health",
    "Education",
    "Family",
    "Personal",
    "Other",
];

impl TransactionKind {
    /// The capitalized label used for grouping headers, e.g. "Income".
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// The fixed category list for this kind.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            TransactionKind::Income => &INCOME_CATEGORIES,
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// Apply this kind's sign convention to a magnitude: expenses are stored
    /// negative, income positive.
    pub fn signed(self, magnitude: f64) -> f64 {
        match self {
            TransactionKind::Income => magnitude.abs(),
            TransactionKind::Expense => -magnitude.abs(),
        }
    }
}

/// An income or expense recorded by the backend store.
///
/// The amount is a signed value in USD: negative for expenses, positive for
/// income, agreeing with `kind`. The backend is authoritative; instances held
/// by this server are a transient copy replaced on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The unique, backend-assigned ID of the transaction.
    pub id: TransactionId,
    /// The category label, e.g. "Groceries".
    pub text: String,
    /// The signed amount in USD.
    pub amount: f64,
    /// The month the transaction belongs to.
    pub month: Month,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// A transaction to be created, identical to [Transaction] minus the
/// backend-assigned ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The category label.
    pub text: String,
    /// The signed amount in USD.
    pub amount: f64,
    /// The month the transaction belongs to.
    pub month: Month,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

#[cfg(test)]
mod tests {
    use super::{Transaction, TransactionKind};

    #[test]
    fn signed_applies_sign_convention() {
        assert_eq!(TransactionKind::Income.signed(25.0), 25.0);
        assert_eq!(TransactionKind::Expense.signed(25.0), -25.0);

        // The sign of the input does not matter, only its magnitude.
        assert_eq!(TransactionKind::Income.signed(-25.0), 25.0);
        assert_eq!(TransactionKind::Expense.signed(-25.0), -25.0);
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(TransactionKind::Income.label(), "Income");
        assert_eq!(TransactionKind::Expense.label(), "Expense");
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn transaction_round_trips_through_backend_json() {
        let body = r#"{"id": 7, "text": "Salary", "amount": 1000.0, "month": "2024-01", "type": "income"}"#;
        let transaction: Transaction = serde_json::from_str(body).unwrap();

        assert_eq!(transaction.id, 7);
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.month.to_string(), "2024-01");

        let json = serde_json::to_string(&transaction).unwrap();
        let reparsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, transaction);
    }
}
