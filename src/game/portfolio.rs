//! Cash and per-symbol holdings with weighted-average cost tracking.

use super::catalog::{Symbol, SYMBOL_COUNT};
use super::error::GameError;
use super::format_money;

/// Cost-tracking data for one symbol.
///
/// `total_paid` / `total_bought` give the weighted-average cost basis. Both
/// are reset to exactly zero whenever the position is fully closed so no
/// floating-point residue survives a round trip.
#[derive(Clone, Copy, Debug, Default)]
pub struct Position {
    pub shares: u32,
    pub total_paid: f64,
    pub total_bought: u32,
}

pub struct Portfolio {
    pub cash: f64,
    positions: [Position; SYMBOL_COUNT],
}

impl Portfolio {
    pub fn new(cash: f64) -> Self {
        Self {
            cash,
            positions: [Position::default(); SYMBOL_COUNT],
        }
    }

    pub fn position(&self, sym: Symbol) -> &Position {
        &self.positions[sym.index()]
    }

    /// Average price paid per share still tracked, 0 when nothing is tracked.
    pub fn avg_cost(&self, sym: Symbol) -> f64 {
        let p = self.position(sym);
        if p.total_bought > 0 {
            p.total_paid / p.total_bought as f64
        } else {
            0.0
        }
    }

    /// Market value of all holdings at the given per-symbol prices.
    pub fn holdings_value(&self, prices: &[f64]) -> f64 {
        Symbol::ALL
            .iter()
            .map(|s| self.positions[s.index()].shares as f64 * prices[s.index()])
            .sum()
    }

    pub fn buy(&mut self, sym: Symbol, shares: u32, price: f64) -> Result<String, GameError> {
        if shares == 0 {
            return Err(GameError::InvalidAmount);
        }
        let cost = shares as f64 * price;
        if cost > self.cash {
            return Err(GameError::InsufficientFunds);
        }
        self.cash -= cost;
        let p = &mut self.positions[sym.index()];
        p.shares += shares;
        p.total_paid += cost;
        p.total_bought += shares;
        Ok(format!(
            "Bought {} shares of {} at {} each ({} total).",
            shares,
            sym.ticker(),
            format_money(price),
            format_money(cost)
        ))
    }

    pub fn sell(&mut self, sym: Symbol, shares: u32, price: f64) -> Result<String, GameError> {
        if shares == 0 {
            return Err(GameError::InvalidAmount);
        }
        let p = &mut self.positions[sym.index()];
        if shares > p.shares {
            return Err(GameError::InsufficientShares);
        }
        let proceeds = shares as f64 * price;
        self.cash += proceeds;
        p.shares -= shares;
        if p.total_bought > 0 {
            let frac = shares as f64 / p.total_bought as f64;
            p.total_paid -= p.total_paid * frac;
            p.total_bought -= shares.min(p.total_bought);
            if p.shares == 0 || p.total_bought == 0 {
                p.total_paid = 0.0;
                p.total_bought = 0;
            }
        }
        Ok(format!(
            "Sold {} shares of {} at {} each ({} total).",
            shares,
            sym.ticker(),
            format_money(price),
            format_money(proceeds)
        ))
    }
}
