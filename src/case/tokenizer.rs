use std::iter::FusedIterator;
use std::str::CharIndices;

const KEBAB: char = '-';
const SNAKE: char = '_';

/// Hyphen, underscore and any whitespace separate words and never appear in them.
fn is_delimiter(ch: char) -> bool {
    ch == KEBAB || ch == SNAKE || ch.is_whitespace()
}

/// Entering an uppercase run starts a new word.
///
/// Uses the Unicode `Uppercase` property, which is wider than category Lu: it
/// also covers `Other_Uppercase` such as Roman numerals (`Ⅰ`) and circled
/// letters (`Ⓐ`), so those cut words too.
fn is_cut(ch: char) -> bool {
    ch.is_uppercase()
}

/// Lazy iterator over the words of an identifier-like string.
///
/// A word ends on the first delimiter of a run (so `"a--b"` has two words, not
/// three) and before any uppercase letter that follows a non-uppercase one.
/// A run of capitals stays together: `"XMLParser"` is a single word while
/// `"xmlParser"` yields `"xml"` and `"Parser"`. Every word borrows the input.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    start: Option<usize>,
    prev_delimiter: bool,
    prev_cut: bool,
}

impl<'a> Fields<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            start: None,
            prev_delimiter: false,
            prev_cut: false,
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, ch) in self.chars.by_ref() {
            let delimiter = is_delimiter(ch);
            let cut = is_cut(ch);
            let boundary = (cut && !self.prev_cut) || (delimiter && !self.prev_delimiter);
            self.prev_delimiter = delimiter;
            self.prev_cut = cut;

            // `start` always points before `idx`, so the word is never empty
            let word = if boundary {
                self.start.take().map(|start| &self.text[start..idx])
            } else {
                None
            };

            if delimiter {
                self.start = None;
            } else if self.start.is_none() {
                self.start = Some(idx);
            }

            if word.is_some() {
                return word;
            }
        }

        self.start.take().map(|start| &self.text[start..])
    }
}

impl FusedIterator for Fields<'_> {}

/// Split `text` into its words, in order.
///
/// Returns an empty vector when `text` is empty or holds only delimiters.
pub fn fields(text: &str) -> Vec<&str> {
    Fields::new(text).collect()
}
