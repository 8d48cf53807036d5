pub const TYPE_INTERVAL_MS: u64 = 100;

/// Reveals a line of text one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    typed_chars: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            typed_chars: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn progress(&self) -> usize {
        self.typed_chars
    }

    pub fn is_complete(&self) -> bool {
        self.typed_chars >= self.len()
    }

    /// Types the next character. Returns false once there is nothing left.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.typed_chars += 1;
        true
    }

    pub fn typed(&self) -> &str {
        match self.text.char_indices().nth(self.typed_chars) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new("Rust");
        assert_eq!(tw.typed(), "");
        assert!(tw.advance());
        assert_eq!(tw.typed(), "R");
        assert!(tw.advance());
        assert!(tw.advance());
        assert_eq!(tw.typed(), "Rus");
        assert!(!tw.is_complete());
        assert!(tw.advance());
        assert!(tw.is_complete());
        assert!(!tw.advance());
        assert_eq!(tw.typed(), "Rust");
        assert_eq!(tw.progress(), 4);
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("naïve → ok");
        assert_eq!(tw.len(), 10);
        for _ in 0..3 {
            tw.advance();
        }
        assert_eq!(tw.typed(), "naï");
        for _ in 0..4 {
            tw.advance();
        }
        assert_eq!(tw.typed(), "naïve →");
        while tw.advance() {}
        assert_eq!(tw.typed(), "naïve → ok");
    }

    #[test]
    fn test_empty_text_is_complete() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_empty());
        assert!(tw.is_complete());
        assert!(!tw.advance());
        assert_eq!(tw.typed(), "");
    }
}
