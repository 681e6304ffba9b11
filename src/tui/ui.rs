use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MessageList, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    let busy = app.is_uploading || app.is_answering;
    TitleBar::new(app.status.as_ref(), busy, spinner_frame).render(frame, title_area);

    if app.transcript.is_empty() {
        draw_landing(frame, main_area);
    } else {
        MessageList::new(&mut tui.message_list, &app.transcript).render(frame, main_area);
    }

    // Input props come from app state each frame
    tui.input_box.dimmed = busy;
    if app.documents_uploaded {
        tui.input_box.title = "Pregunta".to_string();
        tui.input_box.placeholder = "Haz una pregunta sobre el documento...".to_string();
    } else {
        tui.input_box.title = "Documento".to_string();
        tui.input_box.placeholder =
            "Arrastra un archivo PDF o TXT aquí, o escribe su ruta...".to_string();
    }
    tui.input_box.render(frame, input_area);
}

/// Shown while the transcript is still empty.
fn draw_landing(frame: &mut Frame, area: ratatui::layout::Rect) {
    let hint = Paragraph::new(
        "Bienvenido al taller RAG.\n\n\
         Sube un documento (PDF o TXT, máximo 10MB) para comenzar:\n\
         arrastra el archivo a la terminal o escribe su ruta y presiona Enter.\n\n\
         Después podrás hacer preguntas sobre su contenido.",
    )
    .block(Block::bordered())
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ready_app, test_app};
    use crate::tui::TuiState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_landing_shown_before_any_messages() {
        let app = test_app();
        let text = render_to_text(&app);
        assert!(text.contains("Sube un documento"));
        assert!(text.contains("Documento")); // intake-mode input title
    }

    #[test]
    fn test_ready_app_shows_question_input() {
        let mut app = ready_app();
        app.transcript.push_assistant("Listo.");
        let text = render_to_text(&app);
        assert!(text.contains("Pregunta"));
        assert!(text.contains("Listo."));
    }
}
