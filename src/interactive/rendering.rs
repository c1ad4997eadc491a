//! TUI rendering with ratatui
//!
//! Board, history and statistics panels for the Mastermind interface.

use super::app::{App, MessageStyle, Theme};
use crate::core::Peg;
use crate::game::GameState;
use crate::output::formatters::{EXACT_SYMBOL, MISS_SYMBOL, PARTIAL_SYMBOL, peg_label};
use crate::output::palette::{peg_color, wants_light_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

struct Palette {
    base: Style,
    accent: Color,
    muted: Color,
}

const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            base: Style::new().fg(Color::White).bg(Color::Black),
            accent: Color::Cyan,
            muted: Color::DarkGray,
        },
        Theme::Light => Palette {
            base: Style::new().fg(Color::Black).bg(Color::White),
            accent: Color::Blue,
            muted: Color::Gray,
        },
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let colors = palette(app.theme);
    f.render_widget(Block::default().style(colors.base), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, &colors, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, &colors, main_chunks[0]);
    render_info_panel(f, app, &colors, main_chunks[1]);
    render_status(f, &colors, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let title = format!(
        "🔐 MASTERMIND - {}",
        app.game.difficulty().name().to_uppercase()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.accent)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Current guess
            Constraint::Length(4), // Color picker
            Constraint::Min(5),    // History
        ])
        .split(area);

    render_current_guess(f, app, colors, chunks[0]);
    render_color_picker(f, app, chunks[1]);
    render_history(f, app, colors, chunks[2]);
}

fn peg_span(peg: Peg, accessible: bool) -> Span<'static> {
    let (r, g, b) = peg_color(peg).rgb;
    let label_color = if wants_light_label(peg) {
        Color::White
    } else {
        Color::Black
    };
    Span::styled(
        format!(" {} ", peg_label(peg, accessible)),
        Style::default()
            .bg(Color::Rgb(r, g, b))
            .fg(label_color)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_current_guess(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let mut slots = vec![Span::raw(" ")];
    for slot in &app.current_guess {
        match slot {
            Some(peg) => slots.push(peg_span(*peg, app.accessible)),
            None => slots.push(Span::styled(" ? ", Style::default().fg(colors.muted))),
        }
        slots.push(Span::raw(" "));
    }

    let session = app.game.session();
    let hint = match session.state() {
        GameState::InProgress if app.guess_is_complete() => {
            Line::from(Span::styled(" Press Enter to submit", Style::default().fg(Color::Green)))
        }
        GameState::InProgress => Line::from(Span::styled(
            format!(" Select {} colors", session.code_length()),
            Style::default().fg(colors.muted),
        )),
        GameState::Won => Line::from(Span::styled(
            " Code cracked! Press 'n' for a new game",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        GameState::Lost => {
            let mut spans = vec![Span::styled(
                " The code was: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )];
            for &peg in session.reveal_secret().pegs() {
                spans.push(peg_span(peg, app.accessible));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(vec![Line::from(slots), Line::from(""), hint]).block(
        Block::default()
            .title(" Your Guess ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_color_picker(f: &mut Frame, app: &App, area: Rect) {
    let mut keys = vec![Span::raw(" ")];
    let mut swatches = vec![Span::raw(" ")];
    for peg in Peg::all() {
        keys.push(Span::raw(format!(" {} ", peg.id())));
        keys.push(Span::raw(" "));
        swatches.push(peg_span(peg, app.accessible));
        swatches.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(vec![Line::from(keys), Line::from(swatches)])
        .block(Block::default().title(" Colors ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let session = app.game.session();
    let total = session.history().len();

    let items: Vec<ListItem> = session
        .history_newest_first()
        .enumerate()
        .map(|(i, record)| {
            let mut spans = vec![Span::styled(
                format!("{:>2}. ", total - i),
                Style::default().fg(colors.muted),
            )];
            for &peg in record.guess().pegs() {
                spans.push(peg_span(peg, app.accessible));
                spans.push(Span::raw(" "));
            }

            let feedback = record.feedback();
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                EXACT_SYMBOL.to_string().repeat(feedback.exact()),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(
                PARTIAL_SYMBOL.to_string().repeat(feedback.partial()),
            ));
            spans.push(Span::styled(
                MISS_SYMBOL
                    .to_string()
                    .repeat(feedback.misses(session.code_length())),
                Style::default().fg(colors.muted),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(format!(" History ({EXACT_SYMBOL} exact  {PARTIAL_SYMBOL} partial) "))
            .borders(Borders::ALL),
    );
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(7), // Statistics
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts(f, app, colors, chunks[0]);
    render_statistics(f, app, colors, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let session = app.game.session();
    let max = session.rules().max_attempts();
    let remaining = session.attempts_remaining();
    let ratio = if max == 0 {
        0.0
    } else {
        f64::from(remaining) / f64::from(max)
    };
    let gauge_color = if ratio > 0.5 {
        colors.accent
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(ratio)
        .label(format!("{remaining}/{max}"));
    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let stats = app.game.statistics();
    let best = stats
        .best_score()
        .map_or_else(|| "-".to_string(), |best| best.to_string());
    let recent = stats
        .recent_results()
        .map(|result| result.to_string())
        .collect::<Vec<_>>()
        .join("  ");

    let content = vec![
        Line::from(format!("Games played: {}", stats.games_played())),
        Line::from(format!("Win rate:     {:.0}%", stats.win_rate())),
        Line::from(vec![
            Span::raw("Best score:   "),
            Span::styled(
                best,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Recent:       {}",
            if recent.is_empty() { "-" } else { recent.as_str() }
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(colors.accent)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default(),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, colors: &Palette, area: Rect) {
    let help = Paragraph::new(concat!(
        "0-9: Color | Bksp: Undo peg | c: Clear | Enter: Submit | n: New | ",
        "Tab: Difficulty | a: Numbers | t: Theme | q: Quit",
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(colors.muted))
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::game::Game;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_statistics() {
        let mut game = Game::with_seed(Difficulty::Easy, 0);
        game.start_with_secret(Difficulty::Easy, "1234".parse().unwrap())
            .unwrap();
        let mut app = App::new(game, true);
        for peg in [1, 2, 4, 3] {
            app.select_peg(Peg::new(peg).unwrap());
        }
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("MASTERMIND - EASY"));
        assert!(text.contains("Games played: 0"));
        assert!(text.contains("9/10"));
        assert!(text.contains("●●○○"));
    }

    #[test]
    fn renders_secret_after_loss() {
        let mut game = Game::with_seed(Difficulty::Easy, 0);
        game.start_with_secret(Difficulty::Easy, "5555".parse().unwrap())
            .unwrap();
        let mut app = App::new(game, true);
        app.theme = Theme::Light;
        for _ in 0..10 {
            for _ in 0..4 {
                app.select_peg(Peg::new(0).unwrap());
            }
            app.submit_guess();
        }

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("The code was:"));
        assert!(text.contains("Recent:       Lost"));
    }
}
