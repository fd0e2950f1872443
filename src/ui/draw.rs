use ratatui::Frame;
use crate::app::App;
use super::{main_view, tip_sheet, toast};

/// Main entry point for UI rendering
/// Journal first, then the tip sheet and toast on top
pub fn draw(f: &mut Frame, app: &mut App) {
    main_view::draw_main(f, app);
    if app.is_tip_open {
        tip_sheet::draw_tip_sheet(f, app);
    }
    toast::render_toast(f, app);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::app::core::test_support::app;
    use crate::notice::MessageType;

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_empty_journal() {
        let mut app = app();
        let text = screen_text(&mut app);
        assert!(text.contains("JOURNAL"));
        assert!(text.contains("No entries yet."));
    }

    #[test]
    fn renders_entries_with_marginalia() {
        let mut app = app();
        app.journal.add("https://example.com", "Locate the quiet part", "Mark a statistic").unwrap();
        let text = screen_text(&mut app);
        assert!(text.contains("Locate the quiet part"));
        assert!(text.contains("Marginalia:"));
        assert!(text.contains("https://example.com"));
    }

    #[test]
    fn renders_tip_sheet_and_toast() {
        let mut app = app();
        app.open_tip();
        app.set_message(MessageType::Info, "Cleared.");
        let text = screen_text(&mut app);
        assert!(text.contains("Send USDC"));
        assert!(text.contains("$10"));
        assert!(text.contains("Cleared."));
    }
}
