//! Fake text generator for character columns.

use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use rand::RngCore;

/// Below this many characters, text is assembled from single words instead
/// of whole sentences.
const SENTENCE_THRESHOLD: usize = 25;

/// Source of fake text for character columns.
pub trait TextGenerator: Send + Sync {
    /// Produce trimmed text of at most `max_chars` characters.
    fn text(&self, rng: &mut dyn RngCore, max_chars: usize) -> String;
}

/// Lorem ipsum text from the `fake` crate.
///
/// Short limits produce a capitalized run of words ending in a period; longer
/// limits produce whole sentences. Output never exceeds the limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoremText;

impl TextGenerator for LoremText {
    fn text(&self, rng: &mut dyn RngCore, max_chars: usize) -> String {
        if max_chars == 0 {
            return String::new();
        }

        let words_only = max_chars < SENTENCE_THRESHOLD;
        let mut text = String::new();
        let mut length = 0;

        loop {
            let piece: String = if words_only {
                Word().fake_with_rng(rng)
            } else {
                Sentence(3..10).fake_with_rng(rng)
            };
            let piece_length = piece.chars().count();
            if piece_length == 0 {
                break;
            }

            let separator = usize::from(length > 0);
            if length + separator + piece_length > max_chars {
                if length == 0 {
                    text = piece;
                }
                break;
            }

            if separator == 1 {
                text.push(' ');
            }
            text.push_str(&piece);
            length += separator + piece_length;
        }

        if words_only {
            text = capitalize(&text);
            if text.chars().count() < max_chars {
                text.push('.');
            }
        }

        truncate_chars(text.trim(), max_chars).trim().to_string()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Longest prefix of `text` with at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
