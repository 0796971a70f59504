//! Editable code buffer with a char-indexed cursor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBuffer {
    content: String,
    /// Char index, `0..=char_count`
    cursor: usize,
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

impl CodeBuffer {
    /// Cursor lands at the end of the seeded text.
    pub fn seeded(content: &str) -> Self {
        Self {
            content: content.to_string(),
            cursor: content.chars().count(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let byte_idx = char_to_byte_index(&self.content, self.cursor);
        self.content.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn insert_tab(&mut self) {
        let byte_idx = char_to_byte_index(&self.content, self.cursor);
        self.content.insert_str(byte_idx, &" ".repeat(TAB_WIDTH));
        self.cursor += TAB_WIDTH;
    }

    pub fn insert_str(&mut self, text: &str) {
        let byte_idx = char_to_byte_index(&self.content, self.cursor);
        self.content.insert_str(byte_idx, text);
        self.cursor += text.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = char_to_byte_index(&self.content, self.cursor);
            self.content.remove(byte_idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = char_to_byte_index(&self.content, self.cursor);
            self.content.remove(byte_idx);
        }
    }

    /// (start char index, length in chars) per line
    fn line_spans(&self) -> Vec<(usize, usize)> {
        let mut result = Vec::new();
        let mut start = 0;
        for line in self.content.split('\n') {
            let len = line.chars().count();
            result.push((start, len));
            start += len + 1;
        }
        result
    }

    /// Zero-based (line, column) of the cursor
    pub fn cursor_position(&self) -> (usize, usize) {
        let lines = self.line_spans();
        for (i, (start, len)) in lines.iter().enumerate() {
            if self.cursor >= *start && self.cursor <= start + len {
                return (i, self.cursor - start);
            }
        }
        (0, self.cursor)
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let lines = self.line_spans();
        let total_chars = self.char_count();
        let (current_line, current_col) = self.cursor_position();

        self.cursor = match movement {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(total_chars),
            CursorMove::Home => lines.get(current_line).map_or(0, |(s, _)| *s),
            CursorMove::End => lines
                .get(current_line)
                .map_or(total_chars, |(s, l)| s + l),
            CursorMove::Up => {
                if current_line == 0 {
                    self.cursor
                } else {
                    let (prev_start, prev_len) = lines[current_line - 1];
                    prev_start + current_col.min(prev_len)
                }
            }
            CursorMove::Down => {
                if current_line + 1 >= lines.len() {
                    self.cursor
                } else {
                    let (next_start, next_len) = lines[current_line + 1];
                    next_start + current_col.min(next_len)
                }
            }
        };
    }

    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }
}
