//! Player-facing failure taxonomy for game operations.
//!
//! Every mutating operation returns `Result<String, GameError>`: the `Ok`
//! side carries the confirmation line for the log, the `Err` side one of
//! these variants. A failed operation never changes state and is reported
//! exactly once; nothing here is fatal to the process.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid amount: it must be positive.")]
    InvalidAmount,

    #[error("Not enough cash for that.")]
    InsufficientFunds,

    #[error("You don't hold that many shares.")]
    InsufficientShares,

    #[error("That would exceed the $100,000 loan cap.")]
    LoanCapExceeded,
}
