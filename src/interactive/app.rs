//! TUI application state and logic

use crate::commands::{FindResult, SearchConfig, find_words};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which input field receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Tiles,
    Constraints,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub words: &'a [String],
    pub base: SearchConfig,
    pub focus: Field,
    pub tiles_input: String,
    pub constraints_input: String,
    pub result: Option<FindResult>,
    pub constraint_error: Option<String>,
    pub scroll: u16,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app; `base` supplies length policy and maximum length,
    /// and any tiles or constraints it holds pre-fill the inputs.
    #[must_use]
    pub fn new(words: &'a [String], base: SearchConfig) -> Self {
        let mut app = Self {
            words,
            tiles_input: base.tiles.clone(),
            constraints_input: base.constraints.clone().unwrap_or_default(),
            base,
            focus: Field::Tiles,
            result: None,
            constraint_error: None,
            scroll: 0,
            messages: vec![
                Message {
                    text: format!("Loaded {} words.", words.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your tiles; TAB switches to constraints (e.g. a,1,t,3)."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Re-run the search for the current inputs
    pub fn refresh(&mut self) {
        self.scroll = 0;

        if self.tiles_input.trim().is_empty() {
            self.result = None;
            self.constraint_error = None;
            return;
        }

        let config = SearchConfig {
            tiles: self.tiles_input.clone(),
            constraints: Some(self.constraints_input.clone()),
            ..self.base.clone()
        };

        match find_words(&config, self.words) {
            Ok(result) => {
                self.result = Some(result);
                self.constraint_error = None;
            }
            Err(e) => {
                // Keep the last good result on screen while the user is typing
                self.constraint_error = Some(e.to_string());
            }
        }
    }

    /// Number of matches currently shown
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.result.as_ref().map_or(0, FindResult::count)
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Tiles => &mut self.tiles_input,
            Field::Constraints => &mut self.constraints_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_input().push(c);
        self.refresh();
    }

    pub fn backspace(&mut self) {
        if self.focused_input().pop().is_some() {
            self.refresh();
        }
    }

    pub fn clear_field(&mut self) {
        self.focused_input().clear();
        self.refresh();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Tiles => Field::Constraints,
            Field::Constraints => Field::Tiles,
        };
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Record the current search in the message log
    pub fn submit(&mut self) {
        if let Some(error) = self.constraint_error.clone() {
            self.add_message(&error, MessageStyle::Error);
        } else if let Some(result) = &self.result {
            let text = format!(
                "{}: {} playable word{}",
                result.tiles,
                result.count(),
                if result.count() == 1 { "" } else { "s" }
            );
            self.add_message(&text, MessageStyle::Success);
        } else {
            self.add_message("Enter some tiles first", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a key press to the app state
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_field();
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> Vec<String> {
        words_from_slice(&["cat", "car", "art", "tar", "cart"])
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn starts_without_results() {
        let list = words();
        let app = App::new(&list, SearchConfig::default());
        assert!(app.result.is_none());
        assert_eq!(app.match_count(), 0);
    }

    #[test]
    fn prefilled_inputs_are_searched() {
        let list = words();
        let base = SearchConfig::new("cart").with_constraints(Some("t,1".to_string()));
        let app = App::new(&list, base);
        assert_eq!(app.match_count(), 1);
    }

    #[test]
    fn typing_tiles_updates_matches() {
        let list = words();
        let mut app = App::new(&list, SearchConfig::default());

        type_text(&mut app, "cat");
        assert_eq!(app.match_count(), 1);

        type_text(&mut app, "r");
        assert_eq!(app.match_count(), 5);

        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.tiles_input, "cat");
        assert_eq!(app.match_count(), 1);
    }

    #[test]
    fn tab_switches_to_constraints() {
        let list = words();
        let mut app = App::new(&list, SearchConfig::default());

        type_text(&mut app, "cart");
        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(app.focus, Field::Constraints);

        type_text(&mut app, "t,1");
        assert_eq!(app.constraints_input, "t,1");
        assert_eq!(app.result.as_ref().unwrap().matches, vec!["tar"]);
    }

    #[test]
    fn partial_constraints_keep_last_result() {
        let list = words();
        let mut app = App::new(&list, SearchConfig::default());

        type_text(&mut app, "cart");
        app.toggle_focus();
        type_text(&mut app, "t,");

        assert!(app.constraint_error.is_some());
        assert_eq!(app.match_count(), 5);

        app.submit();
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let list = words();
        let mut app = App::new(&list, SearchConfig::default());
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = App::new(&list, SearchConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.tiles_input.is_empty());
    }

    #[test]
    fn ctrl_u_clears_focused_field() {
        let list = words();
        let mut app = App::new(&list, SearchConfig::default());
        type_text(&mut app, "cart");
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.tiles_input.is_empty());
        assert!(app.result.is_none());
    }

    #[test]
    fn message_log_is_bounded() {
        let list = words();
        let mut app = App::new(&list, SearchConfig::default());
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }

    #[test]
    fn scroll_saturates_at_top() {
        let list = words();
        let mut app = App::new(&list, SearchConfig::default());
        app.scroll_up(3);
        assert_eq!(app.scroll, 0);
        app.scroll_down(4);
        app.scroll_up(1);
        assert_eq!(app.scroll, 3);
    }
}
