//! Field widgets backing the entry form: free text, digit-only numbers,
//! and bounded steppers. Each one owns its buffer; the form decides which
//! field receives events.

use std::ops::RangeInclusive;

use unicode_width::UnicodeWidthStr;

/// Editable text buffer with a byte-offset cursor.
///
/// Single-line fields silently drop newline input; the note field is
/// constructed multiline and accepts it.
pub struct TextField {
    pub buffer: String,
    /// Cursor as a byte offset into `buffer`, always on a char boundary.
    pub cursor: usize,
    multiline: bool,
}

impl TextField {
    pub fn new(multiline: bool) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            multiline,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, text: &str) {
        if self.multiline {
            self.buffer.insert_str(self.cursor, text);
            self.cursor += text.len();
        } else {
            for c in text.chars().filter(|c| *c != '\n') {
                self.insert(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = prev_char_boundary(&self.buffer, self.cursor);
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            let next = next_char_boundary(&self.buffer, self.cursor);
            self.buffer.drain(self.cursor..next);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_char_boundary(&self.buffer, self.cursor);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = next_char_boundary(&self.buffer, self.cursor);
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len());
    }

    /// Cursor position as (column, line) in display cells, for
    /// `Frame::set_cursor_position`.
    pub fn cursor_cell(&self) -> (u16, u16) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count() as u16;
        let col_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (before[col_start..].width() as u16, line)
    }
}

/// Unsigned number entry: a digit-only buffer edited at the tail.
pub struct NumberField {
    digits: String,
}

impl NumberField {
    pub fn new(value: u32) -> Self {
        Self {
            digits: value.to_string(),
        }
    }

    pub fn set(&mut self, value: u32) {
        self.digits = value.to_string();
    }

    pub fn insert(&mut self, c: char) {
        // 9 digits max, so the buffer always parses as u32
        if c.is_ascii_digit() && self.digits.len() < 9 {
            self.digits.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    /// Parsed value; an emptied buffer reads as 0.
    pub fn value(&self) -> u32 {
        self.digits.parse().unwrap_or(0)
    }

    pub fn text(&self) -> &str {
        &self.digits
    }
}

/// Bounded integer adjusted with Left/Right, mirroring a slider control.
pub struct Stepper {
    value: i64,
    range: RangeInclusive<i64>,
}

impl Stepper {
    pub fn new(value: i64, range: RangeInclusive<i64>) -> Self {
        let value = value.clamp(*range.start(), *range.end());
        Self { value, range }
    }

    pub fn set(&mut self, value: i64) {
        self.value = value.clamp(*self.range.start(), *self.range.end());
    }

    pub fn increment(&mut self) {
        if self.value < *self.range.end() {
            self.value += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.value > *self.range.start() {
            self.value -= 1;
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}
