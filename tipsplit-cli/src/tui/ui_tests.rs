
#[cfg(test)]
mod tests {
    use crate::tui::app::{App, Screen};
    use crate::tui::ui::ui;
    use ratatui::{backend::TestBackend, Terminal};
    use tipsplit_core::prelude::{CalculatorState, TipConfig};

    fn render(app: &App) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                ui(f, app);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_contains(buffer: &ratatui::buffer::Buffer, needle: &str) -> bool {
        for y in 0..buffer.area.height {
            let mut row = String::new();
            for x in 0..buffer.area.width {
                // Buffer::cell((x, y)) returns Option<&Cell>
                if let Some(cell) = buffer.cell((x, y)) {
                    row.push_str(cell.symbol());
                }
            }
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_ui_header_shows_brand() {
        let app = App::new(TipConfig::default(), CalculatorState::new());
        let buffer = render(&app);

        assert!(
            buffer_contains(&buffer, "TIPSPLIT"),
            "Header should contain the brand"
        );
    }

    #[test]
    fn test_ui_render_headline_card() {
        let app = App::new(TipConfig::default(), CalculatorState::new());
        let buffer = render(&app);

        assert!(buffer_contains(&buffer, "Total per person"));
        // Fresh state shows zeros in the default currency
        assert!(buffer_contains(&buffer, "R$0.00"));
    }

    #[test]
    fn test_ui_render_typed_bill() {
        let mut state = CalculatorState::new();
        state.set_bill_text("75.50");
        let app = App::new(TipConfig::default(), state);
        let buffer = render(&app);

        // The bill field echoes the amount and, with no tip and a single
        // person, the headline matches it
        assert!(buffer_contains(&buffer, "75.50"));
        assert!(buffer_contains(&buffer, "R$75.50"));
    }

    #[test]
    fn test_ui_render_percent_label() {
        let mut state = CalculatorState::new();
        state.set_rate_position(1, 6);
        let app = App::new(TipConfig::default(), state);
        let buffer = render(&app);

        assert!(buffer_contains(&buffer, "16.7%"));
    }

    #[test]
    fn test_ui_render_split_row() {
        let mut state = CalculatorState::new();
        state.increment_split();
        state.increment_split();
        let app = App::new(TipConfig::default(), state);
        let buffer = render(&app);

        assert!(buffer_contains(&buffer, "3 people"));
        assert!(buffer_contains(&buffer, "[-]"));
        assert!(buffer_contains(&buffer, "[+]"));
    }

    #[test]
    fn test_ui_help_overlay_lists_keys() {
        let mut app = App::new(TipConfig::default(), CalculatorState::new());
        app.screen = Screen::Help;
        let buffer = render(&app);

        assert!(buffer_contains(&buffer, "NAVIGATION"));
        assert!(buffer_contains(&buffer, "Quit the calculator"));
    }
}
