//! Alphabetic word tokenizer
//!
//! Splits raw text into maximal runs of ASCII letters. Everything else
//! (digits, punctuation, whitespace, apostrophes, non-ASCII characters) is a
//! separator, so `"don't"` yields `"don"` and `"t"`, and `"well-met"` yields
//! `"well"` and `"met"`.
//!
//! Words are produced lazily as slices of the input. [`Tokenizer::tokenize`]
//! materializes them lower-cased for the analysis pipeline, while
//! [`Tokenizer::words`] preserves the original case for the entity extractor.

/// Stateless ASCII word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub const fn new() -> Self {
        Self
    }

    /// Lazily yields every maximal ASCII-letter run in `text`, left to right.
    pub fn words<'a>(&self, text: &'a str) -> Words<'a> {
        Words { text, pos: 0 }
    }

    /// Lower-cased token sequence for `text`. Empty input gives an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.words(text).map(|w| w.to_ascii_lowercase()).collect()
    }
}

/// Iterator over the ASCII-letter runs of a string.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();

        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }

        // ASCII letters are never UTF-8 continuation bytes, so both ends
        // fall on char boundaries.
        Some(&self.text[start..self.pos])
    }
}
