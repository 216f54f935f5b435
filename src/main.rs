//! Entry point: CLI parsing, price seeding, terminal setup, event loop.

mod feed;
mod game;
mod input;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use feed::{seed_prices, YahooFeed};
use game::render::render;
use game::{format_money, StockGame};
use input::{ClickState, InputEvent};

#[derive(Parser, Debug)]
#[command(
    name = "stock-treasure",
    about = "Terminal stock-trading game: turn $25,000 into $5,000,000"
)]
struct Args {
    /// Seed for the price generator; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the startup price fetch and start every stock at $1.00.
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "starting game");

    let mut game = StockGame::new(seed);
    if !args.offline {
        seed_real_prices(&mut game);
    }

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut game);
    restore_terminal(&mut terminal)?;
    result
}

/// Fetches real last-close prices before the alternate screen takes over, so
/// any subscriber output still lands on a normal stderr.
fn seed_real_prices(game: &mut StockGame) {
    match YahooFeed::new() {
        Ok(feed) => {
            let seeded = seed_prices(&mut game.market, &feed);
            for (sym, price) in &seeded {
                game.add_log(
                    &format!(
                        "{} {} starts at {}",
                        sym.glyph(),
                        sym.ticker(),
                        format_money(*price)
                    ),
                    false,
                );
            }
            if seeded.is_empty() {
                game.add_log(
                    "📡 Could not fetch real prices; every stock starts at $1.00.",
                    true,
                );
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "price feed unavailable");
            game.add_log(
                "📡 Could not fetch real prices; every stock starts at $1.00.",
                true,
            );
        }
    }
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(terminal: &mut Tui, game: &mut StockGame) -> Result<()> {
    let mut click_state = ClickState::new();
    while !game.should_quit {
        terminal.draw(|f| render(game, f, &mut click_state))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(ev) = InputEvent::from_key(key) {
                        game.handle_input(ev);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(ev) = click_state.resolve_mouse(mouse) {
                        game.handle_input(ev);
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}
