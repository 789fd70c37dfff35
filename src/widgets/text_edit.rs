/// Single-line edit buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEdit {
    value: String,
    cursor: usize,
}

impl TextEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor.min(self.char_count())
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let pos = self.cursor();
        let byte_pos = self.byte_index(pos);
        self.value.insert(byte_pos, ch);
        self.cursor = pos + 1;
    }

    pub fn backspace(&mut self) -> bool {
        let pos = self.cursor();
        if pos == 0 {
            return false;
        }
        let byte_pos = self.byte_index(pos - 1);
        self.value.remove(byte_pos);
        self.cursor = pos - 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        let pos = self.cursor();
        if pos >= self.char_count() {
            return false;
        }
        let byte_pos = self.byte_index(pos);
        self.value.remove(byte_pos);
        true
    }

    pub fn move_left(&mut self) -> bool {
        let pos = self.cursor();
        if pos == 0 {
            return false;
        }
        self.cursor = pos - 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        let pos = self.cursor();
        if pos >= self.char_count() {
            return false;
        }
        self.cursor = pos + 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.cursor() != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.char_count();
        let moved = self.cursor() != end;
        self.cursor = end;
        moved
    }

    /// Deletes the word (and any separators) left of the cursor.
    pub fn delete_word_left(&mut self) -> bool {
        let mut chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor();

        let mut start = pos;
        while start > 0 && is_separator(chars[start - 1]) {
            start -= 1;
        }
        while start > 0 && !is_separator(chars[start - 1]) {
            start -= 1;
        }
        if start == pos {
            return false;
        }

        chars.drain(start..pos);
        self.value = chars.into_iter().collect();
        self.cursor = start;
        true
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '/' | ',' | '.')
}

#[cfg(test)]
mod tests {
    use super::TextEdit;

    #[test]
    fn inserts_at_cursor_with_multibyte_chars() {
        let mut edit = TextEdit::new();
        edit.set("caf");
        edit.insert('é');
        assert_eq!(edit.value(), "café");
        edit.move_left();
        edit.move_left();
        edit.insert('x');
        assert_eq!(edit.value(), "caxfé");
        assert_eq!(edit.cursor(), 3);
    }

    #[test]
    fn backspace_and_delete_respect_bounds() {
        let mut edit = TextEdit::new();
        assert!(!edit.backspace());
        edit.set("ab");
        assert!(!edit.delete());
        assert!(edit.backspace());
        assert_eq!(edit.value(), "a");
        edit.move_home();
        assert!(edit.delete());
        assert_eq!(edit.value(), "");
    }

    #[test]
    fn delete_word_left_removes_trailing_word() {
        let mut edit = TextEdit::new();
        edit.set("wool sweater");
        assert!(edit.delete_word_left());
        assert_eq!(edit.value(), "wool ");
        assert!(edit.delete_word_left());
        assert_eq!(edit.value(), "");
        assert!(!edit.delete_word_left());
    }
}
