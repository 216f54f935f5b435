//! Game state and logic: one player, one market, one bank, one goal.

pub mod actions;
pub mod bank;
pub mod catalog;
pub mod error;
pub mod market;
pub mod portfolio;
pub mod render;

use crate::input::InputEvent;
use bank::Bank;
use catalog::{Symbol, SYMBOL_COUNT};
use market::{Market, PriceUpdate};
use portfolio::Portfolio;

pub const STARTING_CASH: f64 = 25_000.0;
pub const TARGET_NET_WORTH: f64 = 5_000_000.0;

const MAX_LOG_LINES: usize = 100;

/// Format a dollar amount with comma grouping and cents
/// (e.g. 1234567.5 → "$1,234,567.50").
pub fn format_money(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_money(-n));
    }
    let cents = (n * 100.0).round() as u64;
    let int_part = cents / 100;
    let frac = cents % 100;

    let s = int_part.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let result: String = result.chars().rev().collect();
    format!("${}.{:02}", result, frac)
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Which value a prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    BuyShares,
    SellShares,
    DepositAmount,
    WithdrawAmount,
    BorrowAmount,
    RepayAmount,
}

impl PromptAction {
    pub fn title(self, sym: Symbol) -> String {
        match self {
            PromptAction::BuyShares => format!("Buy how many shares of {}?", sym.ticker()),
            PromptAction::SellShares => format!("Sell how many shares of {}?", sym.ticker()),
            PromptAction::DepositAmount => "Deposit how much?".to_string(),
            PromptAction::WithdrawAmount => "Withdraw how much?".to_string(),
            PromptAction::BorrowAmount => "Borrow how much?".to_string(),
            PromptAction::RepayAmount => "Repay how much?".to_string(),
        }
    }

    /// Share prompts take whole numbers, money prompts take decimals.
    fn accepts(self, c: char) -> bool {
        match self {
            PromptAction::BuyShares | PromptAction::SellShares => c.is_ascii_digit(),
            _ => c.is_ascii_digit() || c == '.',
        }
    }
}

pub enum Mode {
    Table,
    Prompt { action: PromptAction, buffer: String },
}

pub struct StockGame {
    pub market: Market,
    pub portfolio: Portfolio,
    pub bank: Bank,
    pub selected: usize,
    pub mode: Mode,
    pub log: Vec<LogEntry>,
    pub should_quit: bool,
    pub won: bool,
}

impl StockGame {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            market: Market::new(seed),
            portfolio: Portfolio::new(STARTING_CASH),
            bank: Bank::new(),
            selected: 0,
            mode: Mode::Table,
            log: Vec::new(),
            should_quit: false,
            won: false,
        };
        game.add_log("📈 Welcome to the trading floor!", true);
        game.add_log(
            &format!(
                "Turn {} into {} to win.",
                format_money(STARTING_CASH),
                format_money(TARGET_NET_WORTH)
            ),
            false,
        );
        game
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > MAX_LOG_LINES {
            self.log.remove(0);
        }
    }

    pub fn selected_symbol(&self) -> Symbol {
        Symbol::ALL[self.selected]
    }

    /// Cash + bank balance + holdings at current prices. The loan is not
    /// subtracted; it bites through its compounding interest instead.
    pub fn net_worth(&self) -> f64 {
        self.portfolio.cash
            + self.bank.balance
            + self.portfolio.holdings_value(self.market.prices())
    }

    /// Rolls the simulation forward one day and narrates everything.
    pub fn advance_day(&mut self) {
        let report = self.market.advance_day();
        self.add_log(&format!("=== Day {} ===", report.day), true);

        match report.update {
            PriceUpdate::BroadEvent { event, moves } => {
                self.add_log(&format!("💥 {} – {}", event.name, event.desc), true);
                for mv in moves {
                    self.add_log(
                        &format!(
                            "    {} {}: +{:.1}% ({}→{})",
                            mv.symbol.glyph(),
                            mv.symbol.ticker(),
                            (mv.factor - 1.0) * 100.0,
                            format_money(mv.old),
                            format_money(mv.new)
                        ),
                        false,
                    );
                }
            }
            PriceUpdate::DailyDrift(moves) => {
                for mv in moves {
                    self.add_log(
                        &format!(
                            "{} {} daily growth: +{:.1}% ({}→{})",
                            mv.symbol.glyph(),
                            mv.symbol.ticker(),
                            (mv.factor - 1.0) * 100.0,
                            format_money(mv.old),
                            format_money(mv.new)
                        ),
                        false,
                    );
                }
            }
        }

        if let Some(hint) = report.new_hint {
            self.add_log(
                &format!(
                    "💬 Your friend {} whispers: \"I heard {} {} will jump in 2 days!\"",
                    hint.friend,
                    hint.symbol.glyph(),
                    hint.symbol.ticker()
                ),
                true,
            );
        }

        if let Some(tip) = report.tip {
            self.add_log(
                &format!(
                    "🚀 {}'s tip comes true! {} {} jumps +{:.1}% ({}→{})",
                    tip.friend,
                    tip.symbol.glyph(),
                    tip.symbol.ticker(),
                    tip.boost * 100.0,
                    format_money(tip.old),
                    format_money(tip.new)
                ),
                true,
            );
        }

        if report.day % 30 == 0 {
            self.bank.apply_monthly_interest();
            self.add_log("🏦 Bank interest applied.", false);
            let interest = self.bank.apply_loan_interest();
            if interest > 0.0 {
                self.add_log(
                    &format!("💸 Loan interest applied: {}", format_money(interest)),
                    true,
                );
            }
        }

        if !self.won && self.net_worth() >= TARGET_NET_WORTH {
            self.won = true;
            self.add_log(
                &format!("🎉 Net worth hit {} – you win!", format_money(TARGET_NET_WORTH)),
                true,
            );
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match &mut self.mode {
            Mode::Table => self.handle_table_input(event),
            Mode::Prompt { action, buffer } => match event {
                InputEvent::Key(c) if action.accepts(c) && buffer.len() < 12 => {
                    buffer.push(c);
                }
                InputEvent::Erase => {
                    buffer.pop();
                }
                InputEvent::Cancel => {
                    self.mode = Mode::Table;
                }
                InputEvent::Submit => {
                    let action = *action;
                    let buffer = buffer.clone();
                    self.mode = Mode::Table;
                    self.execute_prompt(action, &buffer);
                }
                _ => {}
            },
        }
    }

    fn handle_table_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key('n') | InputEvent::Click(actions::NEXT_DAY) => self.advance_day(),
            InputEvent::Key('b') | InputEvent::Click(actions::BUY) => {
                self.open_prompt(PromptAction::BuyShares);
            }
            InputEvent::Key('s') | InputEvent::Click(actions::SELL) => {
                self.open_prompt(PromptAction::SellShares);
            }
            InputEvent::Key('d') | InputEvent::Click(actions::DEPOSIT) => {
                self.open_prompt(PromptAction::DepositAmount);
            }
            InputEvent::Key('w') | InputEvent::Click(actions::WITHDRAW) => {
                self.open_prompt(PromptAction::WithdrawAmount);
            }
            InputEvent::Key('o') | InputEvent::Click(actions::BORROW) => {
                self.open_prompt(PromptAction::BorrowAmount);
            }
            InputEvent::Key('r') | InputEvent::Click(actions::REPAY) => {
                self.open_prompt(PromptAction::RepayAmount);
            }
            InputEvent::Key('q') | InputEvent::Click(actions::QUIT) => {
                self.should_quit = true;
            }
            InputEvent::Up | InputEvent::Key('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            InputEvent::Down | InputEvent::Key('j') => {
                if self.selected + 1 < SYMBOL_COUNT {
                    self.selected += 1;
                }
            }
            InputEvent::Click(id) if id >= actions::SELECT_BASE => {
                let idx = (id - actions::SELECT_BASE) as usize;
                if idx < SYMBOL_COUNT {
                    self.selected = idx;
                }
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, action: PromptAction) {
        self.mode = Mode::Prompt {
            action,
            buffer: String::new(),
        };
    }

    fn execute_prompt(&mut self, action: PromptAction, buffer: &str) {
        let result = match action {
            PromptAction::BuyShares | PromptAction::SellShares => {
                let sym = self.selected_symbol();
                let price = self.market.price(sym);
                match buffer.parse::<u32>() {
                    Ok(shares) if action == PromptAction::BuyShares => {
                        self.portfolio.buy(sym, shares, price)
                    }
                    Ok(shares) => self.portfolio.sell(sym, shares, price),
                    Err(_) => Err(error::GameError::InvalidAmount),
                }
            }
            _ => match buffer.parse::<f64>() {
                Ok(amount) => self.execute_bank(action, amount),
                Err(_) => Err(error::GameError::InvalidAmount),
            },
        };
        match result {
            Ok(msg) => self.add_log(&msg, false),
            Err(e) => self.add_log(&format!("⚠️ {}", e), true),
        }
    }

    fn execute_bank(&mut self, action: PromptAction, amount: f64) -> Result<String, error::GameError> {
        match action {
            PromptAction::DepositAmount => {
                let msg = self.bank.deposit(amount, self.portfolio.cash)?;
                self.portfolio.cash -= amount;
                Ok(msg)
            }
            PromptAction::WithdrawAmount => {
                let msg = self.bank.withdraw(amount)?;
                self.portfolio.cash += amount;
                Ok(msg)
            }
            PromptAction::BorrowAmount => {
                let msg = self.bank.borrow(amount)?;
                self.portfolio.cash += amount;
                Ok(msg)
            }
            PromptAction::RepayAmount => {
                let (actual, msg) = self.bank.repay(amount, self.portfolio.cash)?;
                self.portfolio.cash -= actual;
                Ok(msg)
            }
            _ => unreachable!("trade prompts are handled separately"),
        }
    }
}
