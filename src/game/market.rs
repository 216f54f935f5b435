//! Daily price evolution: broad market events, per-symbol drift, friend tips.
//!
//! Prices only ever rise. Every multiplier is clamped with
//! `max(old * factor, old)` so no code path can lower a price, and every
//! random draw comes from the one seeded generator owned here, which makes a
//! whole run reproducible from a single seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::catalog::{Symbol, SYMBOL_COUNT};

/// Chance that a day is a broad-event day instead of a drift day.
const EVENT_CHANCE: f64 = 0.15;
/// Chance of a new friend tip being whispered on a day with none pending.
const HINT_CHANCE: f64 = 0.18;
/// A tip fires this many days after it is whispered.
const HINT_LEAD_DAYS: u32 = 2;

const DRIFT_RANGE: (f64, f64) = (1.0001, 1.03);
const TIP_BOOST_RANGE: (f64, f64) = (0.25, 0.45);

pub const FRIENDS: [&str; 8] = [
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Avery", "Riley", "Sam",
];

/// A named always-positive market event hitting a fixed set of symbols.
pub struct MarketEvent {
    pub name: &'static str,
    pub desc: &'static str,
    pub targets: &'static [Symbol],
    pub factor_range: (f64, f64),
}

static TECH_TARGETS: [Symbol; 7] = [
    Symbol::Aapl,
    Symbol::Msft,
    Symbol::Goog,
    Symbol::Nvda,
    Symbol::Adbe,
    Symbol::Crm,
    Symbol::Orcl,
];

pub static EVENTS: [MarketEvent; 3] = [
    MarketEvent {
        name: "AI Breakthrough!",
        desc: "AI beats all benchmarks, tech stocks skyrocket!",
        targets: &TECH_TARGETS,
        factor_range: (1.1, 2.0),
    },
    MarketEvent {
        name: "Technology Surge",
        desc: "Broad tech rally boosts all tech names.",
        targets: &Symbol::ALL,
        factor_range: (1.05, 1.15),
    },
    MarketEvent {
        name: "Bullish Momentum",
        desc: "Strong market momentum pushes all values up.",
        targets: &Symbol::ALL,
        factor_range: (1.02, 1.07),
    },
];

/// A whispered tip waiting to fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    pub trigger_day: u32,
    pub symbol: Symbol,
    pub friend: &'static str,
}

/// One symbol's move during an advance.
#[derive(Clone, Copy, Debug)]
pub struct PriceMove {
    pub symbol: Symbol,
    pub factor: f64,
    pub old: f64,
    pub new: f64,
}

pub enum PriceUpdate {
    BroadEvent {
        event: &'static MarketEvent,
        moves: Vec<PriceMove>,
    },
    DailyDrift(Vec<PriceMove>),
}

/// A tip that came true on this advance.
#[derive(Clone, Copy, Debug)]
pub struct TipFired {
    pub symbol: Symbol,
    pub friend: &'static str,
    pub boost: f64,
    pub old: f64,
    pub new: f64,
}

/// Everything that happened during one `advance_day`, for the caller to
/// narrate and for the bank-interest check (`day % 30`).
pub struct DayReport {
    pub day: u32,
    pub update: PriceUpdate,
    pub new_hint: Option<Hint>,
    pub tip: Option<TipFired>,
}

pub struct Market {
    day: u32,
    prices: [f64; SYMBOL_COUNT],
    history: Vec<Vec<f64>>,
    pending_hint: Option<Hint>,
    rng: StdRng,
}

impl Market {
    pub fn new(seed: u64) -> Self {
        Self {
            day: 1,
            prices: [1.0; SYMBOL_COUNT],
            history: vec![vec![1.0]; SYMBOL_COUNT],
            pending_hint: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn price(&self, sym: Symbol) -> f64 {
        self.prices[sym.index()]
    }

    pub fn prices(&self) -> &[f64; SYMBOL_COUNT] {
        &self.prices
    }

    /// Recorded closes for the chart, oldest first. Never empty.
    pub fn history(&self, sym: Symbol) -> &[f64] {
        &self.history[sym.index()]
    }

    pub fn pending_hint(&self) -> Option<&Hint> {
        self.pending_hint.as_ref()
    }

    /// Overrides the live price without touching history. Used by the
    /// startup seeding; ignores non-positive values.
    pub fn set_price(&mut self, sym: Symbol, price: f64) {
        if price > 0.0 {
            self.prices[sym.index()] = price;
        }
    }

    /// Advances the clock one day and rolls every price forward.
    ///
    /// Order matters and matches the narration: fluctuations first, then a
    /// possible new whisper, then any tip due today fires on top of the
    /// day's move (overwriting that symbol's last history entry).
    pub fn advance_day(&mut self) -> DayReport {
        self.day += 1;

        let update = if self.rng.gen::<f64>() < EVENT_CHANCE {
            let event = EVENTS.choose(&mut self.rng).unwrap();
            let mut moves = Vec::with_capacity(event.targets.len());
            for &sym in event.targets {
                let (lo, hi) = event.factor_range;
                let factor = self.rng.gen_range(lo..hi);
                moves.push(self.bump(sym, factor, true));
            }
            PriceUpdate::BroadEvent { event, moves }
        } else {
            let mut moves = Vec::with_capacity(SYMBOL_COUNT);
            for sym in Symbol::ALL {
                let (lo, hi) = DRIFT_RANGE;
                let factor = self.rng.gen_range(lo..hi);
                moves.push(self.bump(sym, factor, true));
            }
            PriceUpdate::DailyDrift(moves)
        };

        let new_hint = if self.pending_hint.is_none() && self.rng.gen::<f64>() < HINT_CHANCE {
            let hint = Hint {
                trigger_day: self.day + HINT_LEAD_DAYS,
                symbol: *Symbol::ALL.choose(&mut self.rng).unwrap(),
                friend: *FRIENDS.choose(&mut self.rng).unwrap(),
            };
            self.pending_hint = Some(hint);
            Some(hint)
        } else {
            None
        };

        let tip = self.apply_due_hint();

        DayReport {
            day: self.day,
            update,
            new_hint,
            tip,
        }
    }

    fn apply_due_hint(&mut self) -> Option<TipFired> {
        let hint = self.pending_hint?;
        if hint.trigger_day != self.day {
            return None;
        }
        self.pending_hint = None;
        let (lo, hi) = TIP_BOOST_RANGE;
        let boost = self.rng.gen_range(lo..hi);
        let mv = self.bump(hint.symbol, 1.0 + boost, false);
        // The spike replaces the day's close rather than adding a point.
        *self.history[hint.symbol.index()].last_mut().unwrap() = mv.new;
        Some(TipFired {
            symbol: hint.symbol,
            friend: hint.friend,
            boost,
            old: mv.old,
            new: mv.new,
        })
    }

    fn bump(&mut self, sym: Symbol, factor: f64, record: bool) -> PriceMove {
        let old = self.prices[sym.index()];
        let new = (old * factor).max(old);
        self.prices[sym.index()] = new;
        if record {
            self.history[sym.index()].push(new);
        }
        PriceMove {
            symbol: sym,
            factor,
            old,
            new,
        }
    }

    #[cfg(test)]
    fn force_hint(&mut self, hint: Hint) {
        self.pending_hint = Some(hint);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_prices_monotonic_any_seed(seed in any::<u64>(), days in 1usize..40) {
            let mut market = Market::new(seed);
            let mut prev = *market.prices();
            for _ in 0..days {
                market.advance_day();
                for sym in Symbol::ALL {
                    prop_assert!(market.price(sym) >= prev[sym.index()]);
                }
                prev = *market.prices();
            }
        }

        #[test]
        fn prop_history_tracks_price(seed in any::<u64>(), days in 1usize..40) {
            let mut market = Market::new(seed);
            for _ in 0..days {
                market.advance_day();
            }
            for sym in Symbol::ALL {
                let hist = market.history(sym);
                prop_assert!(!hist.is_empty());
                prop_assert!((hist.last().unwrap() - market.price(sym)).abs() < 1e-12);
                // History itself is non-decreasing.
                for w in hist.windows(2) {
                    prop_assert!(w[1] >= w[0]);
                }
            }
        }
    }
}
