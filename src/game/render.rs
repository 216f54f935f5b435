//! Trading floor rendering: header, stock table, price chart, event log.

use ratatui::layout::{Alignment, Constraint, Direction as LayoutDir, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph,
};
use ratatui::Frame;

use crate::input::ClickState;

use super::actions::*;
use super::catalog::Symbol;
use super::{format_money, Mode, StockGame, TARGET_NET_WORTH};

/// How many recent closes the chart shows.
const CHART_POINTS: usize = 40;

pub fn render(game: &StockGame, f: &mut Frame, click_state: &mut ClickState) {
    click_state.clear_targets();
    let area = f.area();

    let chunks = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Table + chart/log
            Constraint::Length(3), // Button bar
        ])
        .split(area);

    let h_chunks = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Length(56), Constraint::Min(30)])
        .split(chunks[1]);

    let right_chunks = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(5)])
        .split(h_chunks[1]);

    render_header(game, f, chunks[0]);
    render_table(game, f, h_chunks[0], click_state);
    render_chart(game, f, right_chunks[0]);
    render_log(game, f, right_chunks[1]);
    render_buttons(f, chunks[2], click_state);

    if let Mode::Prompt { action, buffer } = &game.mode {
        let popup = centered_rect(44, 5, area);
        f.render_widget(Clear, popup);
        let text = vec![
            Line::from(Span::styled(
                action.title(game.selected_symbol()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("> {}_", buffer)),
            Line::from(Span::styled(
                "Enter to confirm, Esc to cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let para = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)));
        f.render_widget(para, popup);
    }
}

fn render_header(game: &StockGame, f: &mut Frame, area: Rect) {
    let net = game.net_worth();
    let line1 = Line::from(vec![
        Span::styled(
            format!(" Day {} ", game.market.day()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("💵 Cash: {}  ", format_money(game.portfolio.cash))),
        Span::raw(format!("🏦 Bank: {}  ", format_money(game.bank.balance))),
        Span::styled(
            format!("💳 Loan: {}", format_money(game.bank.loan)),
            if game.bank.loan > 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
    ]);
    let net_style = if game.won {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let line2 = Line::from(Span::styled(
        format!(
            " 🌍 Net Worth: {} / {}",
            format_money(net),
            format_money(TARGET_NET_WORTH)
        ),
        net_style,
    ));
    let para = Paragraph::new(vec![line1, line2])
        .block(Block::default().borders(Borders::ALL).title(" 📈 Stock Treasure "));
    f.render_widget(para, area);
}

/// First visible row index for a list of `len` rows with `visible` slots,
/// keeping the selection roughly centered and never scrolling past the end.
pub fn table_window(selected: usize, len: usize, visible: usize) -> usize {
    if len <= visible || visible == 0 {
        return 0;
    }
    let half = visible / 2;
    selected.saturating_sub(half).min(len - visible)
}

fn render_table(game: &StockGame, f: &mut Frame, area: Rect, click_state: &mut ClickState) {
    let visible = area.height.saturating_sub(3) as usize; // borders + column header
    let start = table_window(game.selected, Symbol::ALL.len(), visible);

    let mut lines: Vec<Line> = Vec::with_capacity(visible + 1);
    lines.push(Line::from(Span::styled(
        format!(
            " {:<9}{:>10}{:>8}{:>10}{:>12}",
            "Stock", "Price", "Held", "Avg Paid", "Value"
        ),
        Style::default().fg(Color::DarkGray),
    )));

    for (row, sym) in Symbol::ALL.iter().enumerate().skip(start).take(visible) {
        let pos = game.portfolio.position(*sym);
        let price = game.market.price(*sym);
        let avg = game.portfolio.avg_cost(*sym);
        let value = pos.shares as f64 * price;

        let style = if row == game.selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if pos.shares > 0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(
                " {} {:<6}{:>10}{:>8}{:>10}{:>12}",
                sym.glyph(),
                sym.ticker(),
                format_money(price),
                pos.shares,
                if pos.shares > 0 { format_money(avg) } else { "-".to_string() },
                format_money(value),
            ),
            style,
        )));

        // Row 0 of the list sits below the top border and the column header.
        let y = area.y + 2 + (row - start) as u16;
        click_state.add_row_target(area, y, SELECT_BASE + row as u16);
    }

    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Market "));
    f.render_widget(para, area);
}

fn render_chart(game: &StockGame, f: &mut Frame, area: Rect) {
    let sym = game.selected_symbol();
    let pos = game.portfolio.position(sym);
    let gain = if pos.shares > 0 {
        let g = (game.market.price(sym) - game.portfolio.avg_cost(sym)) * pos.shares as f64;
        format!(" gain {} ", format_money(g))
    } else {
        String::new()
    };
    let history = game.market.history(sym);
    let tail_start = history.len().saturating_sub(CHART_POINTS);
    let tail = &history[tail_start..];

    let data: Vec<(f64, f64)> = tail
        .iter()
        .enumerate()
        .map(|(i, &p)| ((tail_start + i) as f64, p))
        .collect();

    let min = tail.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = tail.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // Pad the Y range so a flat line does not hug the frame.
    let pad = ((max - min) * 0.1).max(max.abs() * 0.01).max(0.05);
    let (y_min, y_max) = (min - pad, max + pad);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let x_min = tail_start as f64;
    let x_max = (history.len().saturating_sub(1)).max(1) as f64;
    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} {} – {}{}", sym.glyph(), sym.ticker(), sym.company(), gain)),
        )
        .x_axis(
            Axis::default()
                .bounds([x_min, x_max])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(vec![
                    Line::from(format!("{:.2}", y_min)),
                    Line::from(format!("{:.2}", (y_min + y_max) / 2.0)),
                    Line::from(format!("{:.2}", y_max)),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(chart, area);
}

fn render_log(game: &StockGame, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;

    let log_lines: Vec<Line> = game
        .log
        .iter()
        .rev()
        .take(visible_height)
        .map(|entry| {
            let color = if entry.is_important {
                Color::Yellow
            } else {
                Color::DarkGray
            };
            Line::from(Span::styled(
                format!(" {}", entry.text),
                Style::default().fg(color),
            ))
        })
        .collect();

    let para = Paragraph::new(log_lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "));
    f.render_widget(para, area);
}

const BUTTONS: &[(&str, u16)] = &[
    ("[N]ext Day", NEXT_DAY),
    ("[B]uy", BUY),
    ("[S]ell", SELL),
    ("[D]eposit", DEPOSIT),
    ("[W]ithdraw", WITHDRAW),
    ("L[o]an", BORROW),
    ("[R]epay", REPAY),
    ("[Q]uit", QUIT),
];

fn render_buttons(f: &mut Frame, area: Rect, click_state: &mut ClickState) {
    let mut spans: Vec<Span> = Vec::new();
    let mut x = area.x + 1;
    let y = area.y + 1;
    for (i, (label, action_id)) in BUTTONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
            x += 2;
        }
        spans.push(Span::styled(
            *label,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        let w = label.len() as u16;
        click_state.add_click_target(Rect::new(x, y, w, 1), *action_id);
        x += w;
    }
    let para = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

/// A fixed-size rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── table_window tests ─────────────────────────────────────────

    #[test]
    fn window_fits_entirely() {
        assert_eq!(table_window(0, 10, 20), 0);
        assert_eq!(table_window(9, 10, 10), 0);
    }

    #[test]
    fn window_centers_selection() {
        // 30 rows, 11 visible: selection 15 → start 10
        assert_eq!(table_window(15, 30, 11), 10);
    }

    #[test]
    fn window_clamps_at_top_and_bottom() {
        assert_eq!(table_window(0, 30, 11), 0);
        assert_eq!(table_window(2, 30, 11), 0);
        assert_eq!(table_window(29, 30, 11), 19);
        assert_eq!(table_window(27, 30, 11), 19);
    }

    #[test]
    fn window_zero_visible_is_safe() {
        assert_eq!(table_window(5, 30, 0), 0);
    }

    #[test]
    fn window_every_selection_stays_visible() {
        let (len, visible) = (30, 12);
        for selected in 0..len {
            let start = table_window(selected, len, visible);
            assert!(selected >= start, "selected {selected} above window");
            assert!(selected < start + visible, "selected {selected} below window");
            assert!(start + visible <= len);
        }
    }

    // ── centered_rect tests ────────────────────────────────────────

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(44, 5, area);
        assert_eq!(r.width, 44);
        assert_eq!(r.height, 5);
        assert_eq!(r.x, 28);
        assert_eq!(r.y, 17);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 4);
        let r = centered_rect(44, 5, area);
        assert_eq!(r.width, 20);
        assert_eq!(r.height, 4);
    }

    // ── click registration smoke test ──────────────────────────────

    #[test]
    fn render_registers_buttons_and_rows() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let game = StockGame::new(0);
        let mut cs = ClickState::new();
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(&game, f, &mut cs)).unwrap();

        let ids: Vec<u16> = cs.targets.iter().map(|t| t.action_id).collect();
        for (_, id) in BUTTONS {
            assert!(ids.contains(id), "button {id} not registered");
        }
        // At least the first table row is clickable.
        assert!(ids.contains(&SELECT_BASE));
    }

    #[test]
    fn render_during_prompt_does_not_panic() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let mut game = StockGame::new(0);
        game.handle_input(crate::input::InputEvent::Key('b'));
        game.handle_input(crate::input::InputEvent::Key('5'));
        let mut cs = ClickState::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(&game, f, &mut cs)).unwrap();
    }
}
