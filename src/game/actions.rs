//! Semantic action IDs for click targets.
//!
//! Each constant represents a distinct clickable action in the UI.
//! These IDs are registered during render and dispatched via `InputEvent::Click`.

// ── Trading ─────────────────────────────────────────────────────
pub const NEXT_DAY: u16 = 0;
pub const BUY: u16 = 1;
pub const SELL: u16 = 2;

// ── Bank ────────────────────────────────────────────────────────
pub const DEPOSIT: u16 = 10;
pub const WITHDRAW: u16 = 11;
pub const BORROW: u16 = 12;
pub const REPAY: u16 = 13;

// ── Misc ────────────────────────────────────────────────────────
pub const QUIT: u16 = 20;

// ── Table row selection (base + symbol index 0..29) ─────────────
pub const SELECT_BASE: u16 = 100;
