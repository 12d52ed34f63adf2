//! Turns raw key events into the input events the game understands.
//!
//! The editor owns the in-progress command line. Printable keys and
//! backspace mutate the buffer; Enter, Tab, the arrow keys and Esc come
//! back as discrete events for the shell's event loop. Arrow keys are
//! shorthand for the four compass "go" commands, the keyboard equivalent
//! of direction buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A discrete player action produced by the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A full command line was submitted (buffer already taken)
    Submitted(String),
    /// Tab was pressed on the given partial line
    CompletionRequested(String),
    /// Arrow-key shortcut for "go <direction>"
    Directional(&'static str),
    /// Esc or Ctrl-C
    Cancelled,
}

/// The in-progress command line
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer (after a completion rewrote the line)
    pub fn set_line(&mut self, line: String) {
        self.buffer = line;
    }

    /// Feed one key event in; get a discrete input event out, if this
    /// key finished one.
    pub fn apply_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        // key-up events arrive on some platforms; only presses count
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.buffer);
                Some(InputEvent::Submitted(line))
            }
            KeyCode::Tab => Some(InputEvent::CompletionRequested(self.buffer.clone())),
            KeyCode::Esc => Some(InputEvent::Cancelled),
            KeyCode::Up => Some(InputEvent::Directional("north")),
            KeyCode::Down => Some(InputEvent::Directional("south")),
            KeyCode::Left => Some(InputEvent::Directional("west")),
            KeyCode::Right => Some(InputEvent::Directional("east")),
            KeyCode::Backspace => {
                self.buffer.pop();
                None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Cancelled)
            }
            KeyCode::Char(c) => {
                self.buffer.push(c);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(editor: &mut LineEditor, text: &str) {
        for c in text.chars() {
            assert_eq!(editor.apply_key(press(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn typing_builds_the_buffer_and_enter_submits() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "go north");
        assert_eq!(editor.line(), "go north");

        let event = editor.apply_key(press(KeyCode::Enter));
        assert_eq!(event, Some(InputEvent::Submitted("go north".to_string())));
        assert_eq!(editor.line(), "");
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "loook");
        editor.apply_key(press(KeyCode::Backspace));
        editor.apply_key(press(KeyCode::Backspace));
        type_str(&mut editor, "k");
        assert_eq!(editor.line(), "look");
    }

    #[test]
    fn tab_requests_completion_without_clearing() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "ta");
        let event = editor.apply_key(press(KeyCode::Tab));
        assert_eq!(
            event,
            Some(InputEvent::CompletionRequested("ta".to_string()))
        );
        assert_eq!(editor.line(), "ta");

        editor.set_line("take ".to_string());
        assert_eq!(editor.line(), "take ");
    }

    #[test]
    fn arrows_are_directional_shortcuts() {
        let mut editor = LineEditor::new();
        assert_eq!(
            editor.apply_key(press(KeyCode::Up)),
            Some(InputEvent::Directional("north"))
        );
        assert_eq!(
            editor.apply_key(press(KeyCode::Right)),
            Some(InputEvent::Directional("east"))
        );
    }

    #[test]
    fn esc_and_ctrl_c_cancel() {
        let mut editor = LineEditor::new();
        assert_eq!(
            editor.apply_key(press(KeyCode::Esc)),
            Some(InputEvent::Cancelled)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(editor.apply_key(ctrl_c), Some(InputEvent::Cancelled));
    }
}
