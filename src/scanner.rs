//! Character scanner pushback.
//!
//! Partitioning rules read ahead speculatively and push back what they read
//! when a rule does not match.

/// A forward character reader that can step back.
pub trait CharacterScanner {
    /// Next character, or `None` at end of input. Reading past the end still
    /// advances, so every read can be matched by an `unread`.
    fn read(&mut self) -> Option<char>;

    /// Step back over the last character read.
    fn unread(&mut self);
}

/// Unread a buffer's worth of characters.
pub fn unread<S>(scanner: &mut S, buf: &str)
where
    S: CharacterScanner + ?Sized,
{
    for _ in buf.chars() {
        scanner.unread();
    }
}

/// In-memory scanner over a string.
#[derive(Debug, Clone)]
pub struct TextScanner {
    chars: Vec<char>,
    position: usize,
}

impl TextScanner {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
        }
    }

    /// Character offset of the next read.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl CharacterScanner for TextScanner {
    fn read(&mut self) -> Option<char> {
        let c = self.chars.get(self.position).copied();
        self.position += 1;
        c
    }

    fn unread(&mut self) {
        self.position = self.position.saturating_sub(1);
    }
}
