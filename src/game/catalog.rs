//! The fixed stock catalog: 30 fictional large-caps, defined at startup.

/// Number of symbols in the catalog.
pub const SYMBOL_COUNT: usize = 30;

/// A stock symbol. Discriminants double as dense indices into the per-symbol
/// storage of the portfolio and the market.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Aapl,
    Msft,
    Goog,
    Amzn,
    Tsla,
    Jpm,
    Xom,
    Nvda,
    V,
    Nflx,
    Dis,
    Bac,
    Intc,
    Ko,
    Pep,
    Sbux,
    Mcd,
    Ba,
    Csco,
    Adbe,
    Pypl,
    Crm,
    Orcl,
    T,
    Ge,
    Hon,
    Wmt,
    Cvx,
    F,
    Gm,
}

impl Symbol {
    /// All symbols in display order.
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::Aapl,
        Symbol::Msft,
        Symbol::Goog,
        Symbol::Amzn,
        Symbol::Tsla,
        Symbol::Jpm,
        Symbol::Xom,
        Symbol::Nvda,
        Symbol::V,
        Symbol::Nflx,
        Symbol::Dis,
        Symbol::Bac,
        Symbol::Intc,
        Symbol::Ko,
        Symbol::Pep,
        Symbol::Sbux,
        Symbol::Mcd,
        Symbol::Ba,
        Symbol::Csco,
        Symbol::Adbe,
        Symbol::Pypl,
        Symbol::Crm,
        Symbol::Orcl,
        Symbol::T,
        Symbol::Ge,
        Symbol::Hon,
        Symbol::Wmt,
        Symbol::Cvx,
        Symbol::F,
        Symbol::Gm,
    ];

    /// Dense index in `ALL` order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Symbol> {
        Symbol::ALL.get(idx).copied()
    }

    /// Exchange ticker, also used for the market-data fetch.
    pub fn ticker(self) -> &'static str {
        match self {
            Symbol::Aapl => "AAPL",
            Symbol::Msft => "MSFT",
            Symbol::Goog => "GOOG",
            Symbol::Amzn => "AMZN",
            Symbol::Tsla => "TSLA",
            Symbol::Jpm => "JPM",
            Symbol::Xom => "XOM",
            Symbol::Nvda => "NVDA",
            Symbol::V => "V",
            Symbol::Nflx => "NFLX",
            Symbol::Dis => "DIS",
            Symbol::Bac => "BAC",
            Symbol::Intc => "INTC",
            Symbol::Ko => "KO",
            Symbol::Pep => "PEP",
            Symbol::Sbux => "SBUX",
            Symbol::Mcd => "MCD",
            Symbol::Ba => "BA",
            Symbol::Csco => "CSCO",
            Symbol::Adbe => "ADBE",
            Symbol::Pypl => "PYPL",
            Symbol::Crm => "CRM",
            Symbol::Orcl => "ORCL",
            Symbol::T => "T",
            Symbol::Ge => "GE",
            Symbol::Hon => "HON",
            Symbol::Wmt => "WMT",
            Symbol::Cvx => "CVX",
            Symbol::F => "F",
            Symbol::Gm => "GM",
        }
    }

    /// Display name.
    pub fn company(self) -> &'static str {
        match self {
            Symbol::Aapl => "Apple Inc.",
            Symbol::Msft => "Microsoft Corp.",
            Symbol::Goog => "Alphabet Inc.",
            Symbol::Amzn => "Amazon.com Inc.",
            Symbol::Tsla => "Tesla Inc.",
            Symbol::Jpm => "JP Morgan Chase & Co.",
            Symbol::Xom => "Exxon Mobil Corp.",
            Symbol::Nvda => "NVIDIA Corp.",
            Symbol::V => "Visa Inc.",
            Symbol::Nflx => "Netflix Inc.",
            Symbol::Dis => "The Walt Disney Company",
            Symbol::Bac => "Bank of America Corp.",
            Symbol::Intc => "Intel Corp.",
            Symbol::Ko => "Coca-Cola Co.",
            Symbol::Pep => "PepsiCo Inc.",
            Symbol::Sbux => "Starbucks Corp.",
            Symbol::Mcd => "McDonald's Corp.",
            Symbol::Ba => "Boeing Co.",
            Symbol::Csco => "Cisco Systems Inc.",
            Symbol::Adbe => "Adobe Inc.",
            Symbol::Pypl => "PayPal Holdings Inc.",
            Symbol::Crm => "Salesforce Inc.",
            Symbol::Orcl => "Oracle Corp.",
            Symbol::T => "AT&T Inc.",
            Symbol::Ge => "General Electric Co.",
            Symbol::Hon => "Honeywell International",
            Symbol::Wmt => "Walmart Inc.",
            Symbol::Cvx => "Chevron Corp.",
            Symbol::F => "Ford Motor Co.",
            Symbol::Gm => "General Motors Co.",
        }
    }

    /// Decorative glyph shown next to the ticker.
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Aapl => "🍏",
            Symbol::Msft => "🪟",
            Symbol::Goog => "🔍",
            Symbol::Amzn => "🛒",
            Symbol::Tsla => "🚗",
            Symbol::Jpm => "🏦",
            Symbol::Xom => "🛢️",
            Symbol::Nvda => "💻",
            Symbol::V => "💳",
            Symbol::Nflx => "📺",
            Symbol::Dis => "🏰",
            Symbol::Bac => "🏦",
            Symbol::Intc => "🔌",
            Symbol::Ko => "🥤",
            Symbol::Pep => "🥤",
            Symbol::Sbux => "☕",
            Symbol::Mcd => "🍔",
            Symbol::Ba => "✈️",
            Symbol::Csco => "📡",
            Symbol::Adbe => "🖌️",
            Symbol::Pypl => "💸",
            Symbol::Crm => "☁️",
            Symbol::Orcl => "🗃️",
            Symbol::T => "📞",
            Symbol::Ge => "⚙️",
            Symbol::Hon => "🏭",
            Symbol::Wmt => "🏬",
            Symbol::Cvx => "⛽",
            Symbol::F => "🚙",
            Symbol::Gm => "🚙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_every_symbol_once() {
        assert_eq!(Symbol::ALL.len(), SYMBOL_COUNT);
        for (i, sym) in Symbol::ALL.iter().enumerate() {
            assert_eq!(sym.index(), i);
        }
    }

    #[test]
    fn index_roundtrip() {
        for sym in Symbol::ALL {
            assert_eq!(Symbol::from_index(sym.index()), Some(sym));
        }
        assert_eq!(Symbol::from_index(SYMBOL_COUNT), None);
    }

    #[test]
    fn tickers_are_unique() {
        let mut tickers: Vec<&str> = Symbol::ALL.iter().map(|s| s.ticker()).collect();
        tickers.sort();
        tickers.dedup();
        assert_eq!(tickers.len(), SYMBOL_COUNT);
    }

    #[test]
    fn every_symbol_has_name_and_glyph() {
        for sym in Symbol::ALL {
            assert!(!sym.company().is_empty());
            assert!(!sym.glyph().is_empty());
        }
    }
}
