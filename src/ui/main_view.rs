use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use crate::app::{App, Focus};
use crate::constants::APP_NAME;
use crate::utils::{format_date_stamp, shorten_id};
use super::animations::{render_inkwell_banner, render_scrap_flight};

const INK: Color = Color::LightRed;
const PAPER: Color = Color::Rgb(230, 220, 200);
const DIM: Color = Color::DarkGray;

/// Render the journal screen
pub fn draw_main(f: &mut Frame, app: &mut App) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(INK))
        .title(format!(" {} ", APP_NAME))
        .title_alignment(Alignment::Center);
    f.render_widget(main_block, f.size());

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(6),   // banner
            Constraint::Length(1),   // status line
            Constraint::Min(8),      // compose + journal
            Constraint::Length(3),   // controls
        ])
        .split(f.size());

    render_inkwell_banner(f, main_layout[0], INK);
    render_status_line(f, app, main_layout[1]);

    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),  // prompt + compose
            Constraint::Percentage(55),  // journal
        ])
        .split(main_layout[2]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // daily prompt
            Constraint::Length(3),  // source url
            Constraint::Min(4),     // clip
        ])
        .split(content_layout[0]);

    render_prompt(f, app, left_chunks[0]);
    render_url_input(f, app, left_chunks[1]);
    render_clip_input(f, app, left_chunks[2]);
    render_entries(f, app, content_layout[1]);
    render_help_controls(f, app, main_layout[3]);

    render_scrap_flight(f, app, left_chunks[2], content_layout[1]);
}

fn render_status_line(f: &mut Frame, app: &App, area: Rect) {
    let wallet = match app.tips.wallet_name() {
        Some(name) => shorten_id(&name),
        None => "no wallet".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(format!("◆ {} ", app.host_env.label()), Style::default().fg(INK).add_modifier(Modifier::BOLD)),
        Span::styled("│ ", Style::default().fg(DIM)),
        Span::styled(format!("{} entries ", app.journal.len()), Style::default().fg(PAPER)),
        Span::styled("│ ", Style::default().fg(DIM)),
        Span::styled(format!("WALLET: {}", wallet), Style::default().fg(PAPER)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let prompt_block = Block::default()
        .title("TODAY'S MARGINALIA  [Ctrl+P: new]")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(INK));
    let prompt = Paragraph::new(app.prompts.current())
        .style(Style::default().fg(PAPER).add_modifier(Modifier::ITALIC))
        .wrap(Wrap { trim: true })
        .block(prompt_block);
    f.render_widget(prompt, area);
}

fn input_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
        .border_style(Style::default().fg(if focused { Color::Yellow } else { DIM }))
}

fn render_url_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Url && !app.is_tip_open;
    let text = if app.url_input.is_empty() && !focused {
        Span::styled("https://… (optional)", Style::default().fg(DIM))
    } else {
        Span::styled(format!("{}{}", app.url_input, if focused { "▏" } else { "" }), Style::default().fg(PAPER))
    };
    f.render_widget(Paragraph::new(Line::from(text)).block(input_block("SOURCE", focused)), area);
}

fn render_clip_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Clip && !app.is_tip_open;
    let paragraph = if app.clip_input.is_empty() && !focused {
        Paragraph::new(Span::styled("Paste a snippet worth keeping…", Style::default().fg(DIM)))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Paragraph::new(format!("{}{}", app.clip_input, cursor)).style(Style::default().fg(PAPER))
    };
    f.render_widget(
        paragraph.wrap(Wrap { trim: false }).block(input_block("CLIP  [Enter: tear into journal]", focused)),
        area,
    );
}

fn render_entries(f: &mut Frame, app: &mut App, area: Rect) {
    let journal_block = Block::default()
        .title("JOURNAL")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(INK));

    if app.journal.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No entries yet.", Style::default().fg(PAPER))),
            Line::from(Span::styled("Tear a clip to start your journal.", Style::default().fg(DIM))),
        ])
        .alignment(Alignment::Center)
        .block(journal_block);
        f.render_widget(empty, area);
        return;
    }

    let wrap_width = area.width.saturating_sub(6).max(10) as usize;
    let items: Vec<ListItem> = app
        .journal
        .entries()
        .iter()
        .map(|entry| {
            let fresh = app.fresh_entry == Some(entry.id);
            let mut top = vec![Span::styled(
                format_date_stamp(entry.ts),
                Style::default().fg(if fresh { Color::Yellow } else { INK }),
            )];
            if !entry.url.is_empty() {
                top.push(Span::styled("  source: ", Style::default().fg(DIM)));
                top.push(Span::styled(
                    entry.url.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                ));
            }

            let mut lines = vec![Line::from(top)];
            for wrapped in textwrap::wrap(&entry.clip, wrap_width) {
                lines.push(Line::from(Span::styled(wrapped.into_owned(), Style::default().fg(PAPER))));
            }
            lines.push(Line::from(vec![
                Span::styled("Marginalia: ", Style::default().fg(DIM)),
                Span::styled(entry.prompt.clone(), Style::default().fg(DIM).add_modifier(Modifier::ITALIC)),
            ]));
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(journal_block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▌");
    f.render_stateful_widget(list, area, &mut app.entries_state);
}

fn render_help_controls(f: &mut Frame, app: &App, area: Rect) {
    let controls = if app.is_tip_open {
        "←/→ Preset  0-9 . Amount  ⏎ Send  Esc Close"
    } else {
        "Tab Field  ⏎ Tear  Ctrl+L Clear  Ctrl+P Prompt  Ctrl+T Tip  ↑/↓ Journal  Esc Quit"
    };
    let help = Paragraph::new(controls)
        .style(Style::default().fg(DIM))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(DIM)),
        );
    f.render_widget(help, area);
}
