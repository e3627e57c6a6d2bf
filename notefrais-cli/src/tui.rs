//! Interactive shell: the single-page experience in the terminal.
//!
//! One router instance drives the whole session; key presses feed path
//! tokens back into it and the resulting view descriptions are drawn.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notefrais_core::routes::{BILLS_PATH, NEW_BILL_PATH};
use notefrais_core::{
    BillsGateway, BillsPane, NavIcon, NavigationState, Preview, Router, SessionProvider, View,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap},
};
use std::io::{self, Stdout};

pub fn run<S: SessionProvider, G: BillsGateway>(session: S, gateway: G) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = shell_loop(&mut terminal, session, gateway);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// The event loop runs on the blocking thread; each navigation awaits the
/// gateway inside the ambient runtime.
fn navigate_blocking<S: SessionProvider, G: BillsGateway>(
    router: &mut Router<S, G>,
    path: &str,
) -> Result<View> {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        Ok(tokio::task::block_in_place(|| handle.block_on(router.navigate(path))))
    } else {
        let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
        Ok(rt.block_on(router.navigate(path)))
    }
}

fn shell_loop<S: SessionProvider, G: BillsGateway>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: S,
    gateway: G,
) -> Result<()> {
    let mut router = Router::new(session, gateway);
    let mut path = BILLS_PATH;
    let mut view = navigate_blocking(&mut router, path)?;
    let mut selected: usize = 0;
    let mut preview: Option<Preview> = None;

    loop {
        let nav = router.navigation();
        terminal.draw(|f| draw(f, &view, nav, selected, preview.as_ref()))?;

        let Event::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Esc => preview = None,
            KeyCode::Char('b') => {
                path = BILLS_PATH;
                view = navigate_blocking(&mut router, path)?;
                selected = 0;
                preview = None;
            }
            KeyCode::Char('n') => {
                path = NEW_BILL_PATH;
                view = navigate_blocking(&mut router, path)?;
                preview = None;
            }
            KeyCode::Char('r') => {
                view = navigate_blocking(&mut router, path)?;
                preview = None;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let View::Bills(bills) = &view {
                    if selected + 1 < bills.rows.len() {
                        selected += 1;
                    }
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                selected = selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let View::Bills(bills) = &view {
                    if let Some(row) = bills.rows.get(selected) {
                        preview = Some(BillsPane::new(router.gateway()).open_preview(row));
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, view: &View, nav: NavigationState, selected: usize, preview: Option<&Preview>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    f.render_widget(nav_bar(nav), chunks[0]);

    match view {
        View::Bills(bills) => {
            let header = Row::new(["Type", "Nom", "Date", "Montant", "Statut"])
                .style(Style::default().add_modifier(Modifier::BOLD));
            let rows = bills.rows.iter().enumerate().map(|(i, row)| {
                let style = if i == selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new([
                    row.category_label.to_string(),
                    row.name.clone(),
                    row.date_display.clone(),
                    row.amount_display.clone(),
                    row.status_label.to_string(),
                ])
                .style(style)
            });
            let table = Table::new(
                rows,
                [
                    Constraint::Length(24),
                    Constraint::Min(16),
                    Constraint::Length(14),
                    Constraint::Length(10),
                    Constraint::Length(12),
                ],
            )
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Mes notes de frais"));
            f.render_widget(table, chunks[1]);
        }
        View::NewBill(form) => {
            let mut lines = vec![
                Line::raw(format!("Employé : {}", form.email)),
                Line::raw(format!("Type de dépense : {}", form.categories.join(" | "))),
                Line::raw(format!(
                    "Justificatif : {}",
                    form.file_name.as_deref().unwrap_or("(aucun)")
                )),
                Line::raw(""),
                Line::raw("Submit from the command line: notefrais new --help"),
            ];
            if let Some(message) = &form.message {
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::Red),
                )));
            }
            let para = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Envoyer une note de frais"));
            f.render_widget(para, chunks[1]);
        }
        View::Login(login) => {
            let mut lines = vec![Line::raw("Not connected.")];
            if let Some(message) = &login.message {
                lines.push(Line::raw(message.clone()));
            }
            lines.push(Line::raw("Run: notefrais login --email <you>"));
            let para = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Connexion"));
            f.render_widget(para, chunks[1]);
        }
        View::Error(err) => {
            let para = Paragraph::new(vec![Line::raw(err.message.clone())])
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Erreur"));
            f.render_widget(para, chunks[1]);
        }
        View::NotFound => {
            let para = Paragraph::new("Page introuvable (404)")
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(para, chunks[1]);
        }
    }

    let hints = Paragraph::new("b=bills  n=new bill  r=refresh  ↑/↓=select  Enter=receipt  Esc=close  q=quit")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, chunks[2]);

    if let Some(preview) = preview {
        draw_preview(f, preview);
    }
}

fn nav_bar(nav: NavigationState) -> Paragraph<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for (icon, label) in [
        (NavIcon::Window, "▦ Mes notes de frais"),
        (NavIcon::Mail, "✉ Nouvelle note"),
    ] {
        let style = if nav.is_active(icon) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL))
}

fn draw_preview(f: &mut Frame, preview: &Preview) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let lines = match preview {
        Preview::Image { file_url, file_name } => vec![
            Line::raw(file_name.clone()),
            Line::raw(""),
            Line::raw(file_url.clone()),
        ],
        Preview::Unavailable { message } => vec![Line::raw(message.clone())],
    };
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Justificatif"));
    f.render_widget(para, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
