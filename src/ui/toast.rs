use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::app::App;
use crate::notice::MessageType;

/// Bottom-centered transient message
pub fn render_toast(f: &mut Frame, app: &App) {
    let Some(toast) = app.toast.as_ref() else {
        return;
    };

    let screen = f.size();
    let width = (toast.message.chars().count() as u16 + 6).clamp(20, screen.width.saturating_sub(4).max(20));
    let height = 3 + (toast.message.chars().count() as u16 / width.saturating_sub(4).max(1)).min(3);
    let area = Rect::new(
        screen.x + screen.width.saturating_sub(width) / 2,
        screen.y + screen.height.saturating_sub(height + 4),
        width,
        height,
    )
    .intersection(screen);

    let color = match toast.message_type {
        MessageType::Error => Color::LightRed,
        MessageType::Success => Color::LightGreen,
        MessageType::Info => Color::LightYellow,
    };
    let toast_widget = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(toast_widget, area);
}
