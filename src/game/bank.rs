//! Savings account and capped loan bookkeeping.
//!
//! The bank never touches the portfolio: deposits and repayments report what
//! the caller must debit from cash, withdrawals and borrows what to credit.

use super::error::GameError;
use super::format_money;

/// Loan ceiling across all outstanding borrowing.
pub const MAX_LOAN: f64 = 100_000.0;

/// Annual rate on the savings balance, applied monthly as rate/12.
pub const ANNUAL_BANK_RATE: f64 = 0.05;

/// Rate charged on the outstanding loan at each monthly application.
pub const LOAN_INTEREST: f64 = 0.05;

pub struct Bank {
    pub balance: f64,
    pub loan: f64,
    annual_rate: f64,
    loan_rate: f64,
}

impl Bank {
    pub fn new() -> Self {
        Self {
            balance: 0.0,
            loan: 0.0,
            annual_rate: ANNUAL_BANK_RATE,
            loan_rate: LOAN_INTEREST,
        }
    }

    pub fn deposit(&mut self, amount: f64, available_cash: f64) -> Result<String, GameError> {
        if amount <= 0.0 {
            return Err(GameError::InvalidAmount);
        }
        if amount > available_cash {
            return Err(GameError::InsufficientFunds);
        }
        self.balance += amount;
        Ok(format!("Deposited {}.", format_money(amount)))
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<String, GameError> {
        if amount <= 0.0 {
            return Err(GameError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(GameError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(format!("Withdrew {}.", format_money(amount)))
    }

    pub fn borrow(&mut self, amount: f64) -> Result<String, GameError> {
        if amount <= 0.0 {
            return Err(GameError::InvalidAmount);
        }
        if self.loan + amount > MAX_LOAN {
            return Err(GameError::LoanCapExceeded);
        }
        self.loan += amount;
        Ok(format!("Borrowed {}.", format_money(amount)))
    }

    /// Repays `min(amount, loan)`. Returns the actual repayment alongside the
    /// message so the caller debits cash by exactly that much.
    pub fn repay(&mut self, amount: f64, available_cash: f64) -> Result<(f64, String), GameError> {
        if amount <= 0.0 {
            return Err(GameError::InvalidAmount);
        }
        if amount > available_cash {
            return Err(GameError::InsufficientFunds);
        }
        let actual = amount.min(self.loan);
        self.loan -= actual;
        Ok((
            actual,
            format!(
                "Repaid {}. Remaining loan: {}",
                format_money(actual),
                format_money(self.loan)
            ),
        ))
    }

    /// Applies one month of savings interest. Invoked every 30 simulated days.
    pub fn apply_monthly_interest(&mut self) {
        self.balance *= 1.0 + self.annual_rate / 12.0;
    }

    /// Compounds the loan and returns the interest charged (0 with no loan).
    pub fn apply_loan_interest(&mut self) -> f64 {
        if self.loan > 0.0 {
            let interest = self.loan * self.loan_rate;
            self.loan += interest;
            interest
        } else {
            0.0
        }
    }
}
