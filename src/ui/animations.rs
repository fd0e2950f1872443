use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use crate::app::App;
use crate::constants::{INKWELL_FRAMES, SCRAP_PREVIEW_CHARS};
use crate::utils::preview;
use super::utils::split_ascii_art;

/// 渲染 INKWELL 標題動畫
pub fn render_inkwell_banner(f: &mut Frame, area: Rect, color: Color) {
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let frame = (time % INKWELL_FRAMES.len() as u64) as usize;
    let banner = Paragraph::new(split_ascii_art(INKWELL_FRAMES[frame], color))
        .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

/// Draws the torn scrap gliding from the compose box toward the journal.
pub fn render_scrap_flight(f: &mut Frame, app: &App, from: Rect, to: Rect) {
    let (Some(progress), Some(scrap)) = (app.scrap_progress(Instant::now()), app.scrap.as_ref()) else {
        return;
    };

    let lerp = |a: u16, b: u16| -> u16 { (a as f64 + (b as f64 - a as f64) * progress).round() as u16 };
    // shrink as it flies
    let width = lerp(from.width.min(40), (to.width / 2).max(12)).max(8);
    let height = 5;
    let x = lerp(from.x + 2, to.x + to.width / 4);
    let y = lerp(from.y + 1, to.y + 1);

    let screen = f.size();
    let rect = Rect::new(x, y, width, height).intersection(screen);
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let shade = if progress < 0.5 { Color::White } else { Color::DarkGray };
    let scrap_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(shade));
    let text = Paragraph::new(Line::from(vec![Span::styled(
        preview(&scrap.clip, SCRAP_PREVIEW_CHARS),
        Style::default().fg(shade).add_modifier(Modifier::ITALIC),
    )]))
    .wrap(Wrap { trim: true })
    .block(scrap_block);

    f.render_widget(Clear, rect);
    f.render_widget(text, rect);
}
