use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};

use crate::state::app_state::AppState;

/// Boxed future borrowed from the transaction handed to a [`with_txn`] closure.
pub type TxnFuture<'c, R, E> = Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>;

/// Execute a function within a database transaction.
///
/// Commits when the closure returns `Ok`, rolls back on `Err` and returns the
/// closure's error unchanged.
pub async fn with_txn<R, E, F>(state: &AppState, f: F) -> Result<R, E>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R, E>,
    E: From<DbErr>,
{
    let txn = state.db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
