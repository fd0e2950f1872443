use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use crate::app::App;
use crate::constants::TIP_PRESETS;
use crate::tip::TipState;
use super::utils::centered_rect;

/// Renders the USDC tip sheet over the journal
pub fn draw_tip_sheet(f: &mut Frame, app: &App) {
    let area = centered_rect(56, 15, f.size());
    let state = app.tip_state();
    let pulsing = state == TipState::Preparing;

    let sheet_block = Block::default()
        .title(" TIP THE AUTHOR · USDC on Base ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(if pulsing { BorderType::Thick } else { BorderType::Rounded })
        .border_style(Style::default().fg(if pulsing { Color::LightMagenta } else { Color::LightRed }));

    f.render_widget(Clear, area);
    f.render_widget(sheet_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1),  // presets
            Constraint::Length(1),
            Constraint::Length(3),  // custom amount
            Constraint::Length(1),
            Constraint::Length(3),  // send button
            Constraint::Length(1),  // status
        ])
        .split(area);

    // preset chips
    let mut chips = Vec::new();
    for (i, amount) in TIP_PRESETS.iter().enumerate() {
        let on = app.selected_preset == Some(i);
        let style = if on {
            Style::default().fg(Color::Black).bg(Color::LightRed).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        chips.push(Span::styled(format!(" ${} ", amount), style));
        chips.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(chips)).alignment(Alignment::Center), chunks[0]);

    let custom_focused = app.selected_preset.is_none() && !state.is_busy();
    let custom = Paragraph::new(format!("{}{}", app.custom_amount, if custom_focused { "▏" } else { "" }))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title("CUSTOM AMOUNT (max 6 decimals)")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if custom_focused { Color::Yellow } else { Color::DarkGray })),
        );
    f.render_widget(custom, chunks[2]);

    let disabled = state.is_busy();
    let button = Paragraph::new(state.button_label())
        .alignment(Alignment::Center)
        .style(if disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(Color::LightRed).add_modifier(Modifier::BOLD)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(if disabled { Color::DarkGray } else { Color::LightRed })),
        );
    f.render_widget(button, chunks[4]);

    let status = Paragraph::new(app.get_ink_animation())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC));
    f.render_widget(status, chunks[5]);
}
