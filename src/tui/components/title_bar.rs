//! # TitleBar Component
//!
//! One-line header: app name, the current status banner (the single
//! transient notification surface), and a spinner while work is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{Severity, StatusBanner};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Stateless, props-based: receives the banner and busy state each frame.
pub struct TitleBar<'a> {
    pub status: Option<&'a StatusBanner>,
    pub busy: bool,
    pub spinner_frame: usize,
}

impl<'a> TitleBar<'a> {
    pub fn new(status: Option<&'a StatusBanner>, busy: bool, spinner_frame: usize) -> Self {
        Self {
            status,
            busy,
            spinner_frame,
        }
    }

    fn severity_style(severity: Severity) -> Style {
        match severity {
            Severity::Info => Style::default().fg(Color::Yellow),
            Severity::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Severity::Success => Style::default().fg(Color::Green),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Consulta",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if let Some(banner) = self.status {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                banner.message.as_str(),
                Self::severity_style(banner.severity),
            ));
        }

        if self.busy {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: TitleBar<'_>) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_banner_text() {
        let banner = StatusBanner {
            message: "Sube un documento para comenzar".to_string(),
            severity: Severity::Info,
        };
        let text = render_to_text(TitleBar::new(Some(&banner), false, 0));
        assert!(text.contains("Consulta"));
        assert!(text.contains("Sube un documento para comenzar"));
    }

    #[test]
    fn test_no_banner_renders_name_only() {
        let text = render_to_text(TitleBar::new(None, false, 0));
        assert!(text.contains("Consulta"));
        assert!(!text.contains("|"));
    }

    #[test]
    fn test_busy_spinner_present() {
        let text = render_to_text(TitleBar::new(None, true, 1));
        assert!(text.contains('/'));
    }
}
