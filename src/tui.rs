//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `InputState`: key handling and the text being typed, independent of the terminal
//! - `TuiInterface`: owns the terminal, renders the screen, implements `GameInterface`
//!
//! # State Machine
//! - `EnteringWord` → (rejected submission) → `ShowingError` → back to `EnteringWord`
//! - A new error while one is showing replaces it.

use crate::game_state::{GameInterface, RoundState, UserAction, WordError};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const POPUP_WIDTH_PERCENT: u16 = 60;
const POPUP_HEIGHT: u16 = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const POPUP_TITLE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const WORD_STYLE: Style = Style::new().fg(Color::White);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    /// Modal error; input is blocked until it is acknowledged.
    ShowingError(WordError),
}

/// Text entry and modal handling, kept apart from the terminal so it can be tested.
#[derive(Debug)]
struct InputState {
    current_input: String,
    state: TuiState,
    error_message: String,
}

impl InputState {
    fn new() -> Self {
        Self {
            current_input: String::new(),
            state: TuiState::EnteringWord,
            error_message: String::new(),
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match self.state {
            TuiState::EnteringWord => self.handle_word_input(key),
            TuiState::ShowingError(_) => {
                self.handle_error_input(key);
                None
            }
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        debug_log!(
            "handle_word_input() - Processing key: {:?}, current_input: '{}'",
            key.code,
            self.current_input
        );

        match key.code {
            KeyCode::Char('n' | 'N') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                info_log!("handle_word_input() - Ctrl+N pressed, returning NewRound");
                return Some(UserAction::NewRound);
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => {
                debug_log!(
                    "handle_word_input() - Ignoring character with modifier: {:?}",
                    key.modifiers
                );
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.current_input.chars().count() < MAX_INPUT_LENGTH {
                    self.current_input.push(c);
                } else {
                    self.error_message = format!("Words are at most {MAX_INPUT_LENGTH} letters!");
                }
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                info_log!(
                    "handle_word_input() - Enter pressed, submitting '{}'",
                    self.current_input
                );
                return Some(UserAction::Submit(self.current_input.clone()));
            }
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            _ => {
                debug_log!("handle_word_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_error_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            info_log!("handle_error_input() - Error acknowledged");
            self.state = TuiState::EnteringWord;
        }
    }

    fn show_error(&mut self, error: &WordError) {
        self.state = TuiState::ShowingError(error.clone());
    }

    fn clear(&mut self) {
        self.current_input.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringWord;
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    root_word: &'a str,
    used_words: &'a [String],
    input: &'a InputState,
    message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root_word: String,
    used_words: Vec<String>,
    input: InputState,
    message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            root_word: String::new(),
            used_words: Vec::new(),
            input: InputState::new(),
            message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root_word: &self.root_word,
            used_words: &self.used_words,
            input: &self.input,
            message: &self.message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input
                Constraint::Min(6),    // Used words
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], &ctx.input.current_input, &ctx.input.error_message);
        Self::render_used_words(f, chunks[2], ctx.used_words, ctx.message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], &ctx.input.state);

        if let TuiState::ShowingError(error) = &ctx.input.state {
            Self::render_error_popup(f, f.area(), error);
        }
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_uppercase())
            .style(HEADER_STYLE)
            .block(Block::default().title("Word Scramble").borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, error_message: &str) {
        let mut spans = vec![Span::raw("> "), Span::styled(current_input, WORD_STYLE)];
        if !error_message.is_empty() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(error_message, ERROR_STYLE));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Enter your word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String], message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
            lines.push(Line::from(""));
        }

        let visible = usize::from(area.height.saturating_sub(2)).saturating_sub(lines.len());
        for word in used_words.iter().take(visible) {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", word.chars().count()), BADGE_STYLE),
                Span::raw(" "),
                Span::styled(word.as_str(), WORD_STYLE),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!("Your words ({})", used_words.len()))
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }

    fn render_error_popup(f: &mut Frame, area: Rect, error: &WordError) {
        let popup = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT, area);
        let lines = vec![
            Line::from(""),
            Line::from(error.message.as_str()),
            Line::from(""),
            Line::from(Span::styled("[ OK ]", HEADER_STYLE)),
        ];
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(error.title.as_str(), POPUP_TITLE_STYLE))
                    .borders(Borders::ALL),
            );
        f.render_widget(Clear, popup);
        f.render_widget(paragraph, popup);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringWord => "Type a word | ENTER: Submit | CTRL+N: New root word | ESC: Quit",
            TuiState::ShowingError(_) => "ENTER / ESC: Dismiss",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }

                // Garbage from escape sequences when alt-tabbing
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }

                Ok(self.input.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn show_round(&mut self, round: &RoundState) {
        self.root_word = round.root_word().to_string();
        self.used_words = round.used_words().to_vec();
        self.input.clear();
    }
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(percent_x) / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, round: &RoundState) {
        self.show_round(round);
        self.message = format!("Make words from '{}'", round.root_word());
        self.status = "Ready - Enter your first word".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, round: &RoundState, word: &str) {
        self.used_words = round.used_words().to_vec();
        self.input.clear();
        self.message.clear();
        self.status = format!("Accepted: {word}");
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &WordError) {
        self.input.show_error(error);
        self.status = error.title.clone();
        self.draw_or_log();
    }

    fn display_new_round(&mut self, round: &RoundState) {
        self.show_round(round);
        self.message = format!("New round! Make words from '{}'", round.root_word());
        self.status = "New round - Enter your first word".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
