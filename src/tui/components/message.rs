use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::transcript::{ChatMessage, Role};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single transcript message.
///
/// `Message` is a transient component: created fresh each frame with the data
/// it needs. Styling is role-based — **usuario** (cyan) and **asistente**
/// (green) — with the local send time in the block title.
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph` wrapping,
/// so the parent `MessageList` can lay out scroll positions without
/// rendering first.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub message: &'a ChatMessage,
}

impl<'a> Message<'a> {
    pub fn new(message: &'a ChatMessage) -> Self {
        Self { message }
    }

    /// Calculate the height required for this message given a width.
    ///
    /// The wrapping options must match the `Ratatui` default for `Paragraph`
    /// to ensure 1:1 mapping between calculated and actual height.
    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }

        let content = message.content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn role_label(role: Role) -> &'static str {
        match role {
            Role::User => "usuario",
            Role::Assistant => "asistente",
        }
    }

    fn role_style(role: Role) -> Style {
        match role {
            Role::User => Style::default().fg(Color::Cyan),
            Role::Assistant => Style::default().fg(Color::Green),
        }
    }
}

impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = Self::role_style(self.message.role);
        let title = format!(
            "{} {}",
            Self::role_label(self.message.role),
            self.message.sent_at.with_timezone(&Local).format("%H:%M")
        );

        let block = Block::bordered()
            .title(title)
            .padding(Padding::horizontal(CONTENT_PAD_H))
            .border_style(style.add_modifier(Modifier::DIM))
            .title_style(style);

        Paragraph::new(self.message.content.trim())
            .block(block)
            .style(style)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::ChatMessage;

    #[test]
    fn test_role_labels() {
        assert_eq!(Message::role_label(Role::User), "usuario");
        assert_eq!(Message::role_label(Role::Assistant), "asistente");
    }

    #[test]
    fn test_height_includes_borders() {
        let message = ChatMessage::new(Role::User, "Una sola línea");
        // 1 line of content + 2 for borders = 3
        assert_eq!(Message::calculate_height(&message, 80), 3);
    }

    #[test]
    fn test_height_wraps_long_content() {
        let message = ChatMessage::new(Role::Assistant, "palabra ".repeat(40));
        let height = Message::calculate_height(&message, 40);
        assert!(height > 3, "long content must wrap to multiple lines");
    }

    #[test]
    fn test_height_trims_surrounding_whitespace() {
        let message = ChatMessage::new(Role::Assistant, "\n\n   Recorta   \n\n");
        assert_eq!(Message::calculate_height(&message, 80), 3);
    }

    #[test]
    fn test_height_degenerate_width() {
        let message = ChatMessage::new(Role::User, "x");
        assert_eq!(Message::calculate_height(&message, 2), 1);
    }
}
