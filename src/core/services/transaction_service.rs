//! Business logic helpers for managing transactions.

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::services::{bounded_text, ensure_category_exists, ServiceError, ServiceResult};
use crate::ledger::{Ledger, NewTransaction, Transaction, TransactionQuery};

pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    pub fn add(ledger: &mut Ledger, mut data: NewTransaction) -> ServiceResult<String> {
        data.description = Self::validate(ledger, data.amount, &data.description, &data.category_id)?;
        Ok(ledger.add_transaction(data))
    }

    /// Replaces the transaction with the same id.
    pub fn update(ledger: &mut Ledger, mut transaction: Transaction) -> ServiceResult<()> {
        transaction.description = Self::validate(
            ledger,
            transaction.amount,
            &transaction.description,
            &transaction.category_id,
        )?;
        ledger.update_transaction(transaction)?;
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: &str) -> Option<Transaction> {
        ledger.delete_transaction(id)
    }

    /// Returns a snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions().iter().collect()
    }

    pub fn search<'a>(ledger: &'a Ledger, query: &TransactionQuery) -> Vec<&'a Transaction> {
        ledger.query_transactions(query)
    }

    fn validate(
        ledger: &Ledger,
        amount: Decimal,
        description: &str,
        category_id: &str,
    ) -> ServiceResult<String> {
        if amount.is_zero() {
            debug!("rejected zero-amount transaction");
            return Err(ServiceError::Invalid("Amount cannot be zero".into()));
        }
        let description = bounded_text(description, "Description", DESCRIPTION_MAX_CHARS)?;
        ensure_category_exists(ledger, category_id)?;
        Ok(description)
    }
}
