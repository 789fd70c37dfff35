use crate::catalog::snapshot::SnapshotProvider;
use crate::state::session::{Router, SearchPhase, SearchSession};
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::text_edit::TextEdit;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DEFAULT_MAX_VISIBLE: usize = 6;

pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

/// Query input line with the match dropdown underneath.
pub struct SearchBox {
    edit: TextEdit,
    label: String,
    max_visible: usize,
}

impl SearchBox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            edit: TextEdit::new(),
            label: label.into(),
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }

    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(1);
        self
    }

    pub fn value(&self) -> &str {
        self.edit.value()
    }

    pub fn clear(&mut self) {
        self.edit.clear();
    }

    /// Applies an editing key. Returns `true` when the text changed.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => {
                self.edit.insert(ch);
                true
            }
            KeyCode::Backspace => self.edit.backspace(),
            KeyCode::Delete => self.edit.delete(),
            KeyCode::Left => {
                self.edit.move_left();
                false
            }
            KeyCode::Right => {
                self.edit.move_right();
                false
            }
            KeyCode::Home => {
                self.edit.move_home();
                false
            }
            KeyCode::End => {
                self.edit.move_end();
                false
            }
            _ => false,
        }
    }

    pub fn delete_word_left(&mut self) -> bool {
        self.edit.delete_word_left()
    }

    pub fn draw<P, R>(&self, session: &SearchSession<P, R>) -> DrawOutput
    where
        P: SnapshotProvider,
        R: Router,
    {
        let prompt = self.prompt();
        let mut lines = vec![vec![
            Span::styled(prompt.clone(), Style::new().bold()),
            Span::new(self.edit.value()),
        ]];

        let hint = match session.phase() {
            SearchPhase::Idle => "  Type to search products.",
            SearchPhase::Typing => "  Searching...",
            SearchPhase::Showing => "  Up/Down highlight, Enter open, Esc clear.",
        };
        lines.push(vec![Span::styled(hint, Style::new().color(Color::DarkGrey))]);

        let matches = session.matches();
        if session.phase() == SearchPhase::Showing && matches.is_empty() {
            lines.push(vec![Span::styled(
                "  (no matches)",
                Style::new().color(Color::DarkGrey),
            )]);
        }

        let highlighted = session.highlight().valid_for(matches.len());
        for (row, entry) in matches.iter().take(self.max_visible).enumerate() {
            let selected = highlighted == Some(row);
            let marker = if selected { "  > " } else { "    " };
            let title_style = if selected {
                Style::new().color(Color::Cyan).bold()
            } else {
                Style::default()
            };
            let mut line = vec![
                Span::new(marker),
                Span::styled(entry.item.title.clone(), title_style),
            ];
            if !entry.item.category.is_empty() {
                line.push(Span::styled(
                    format!("  {}", entry.item.category),
                    Style::new().color(Color::DarkGrey),
                ));
            }
            line.push(Span::styled(
                format!("  ${:.2}", entry.item.price),
                Style::new().color(Color::Green),
            ));
            lines.push(line);
        }

        let query_width: usize = self
            .edit
            .value()
            .chars()
            .take(self.edit.cursor())
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum();
        let col = UnicodeWidthStr::width(prompt.as_str()) + query_width;
        DrawOutput {
            lines,
            cursor: Some(CursorPos {
                col: u16::try_from(col).unwrap_or(u16::MAX),
                row: 0,
            }),
        }
    }

    fn prompt(&self) -> String {
        format!("{}: ", self.label)
    }
}
