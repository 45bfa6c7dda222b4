//! Recursive character chunking strategy

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::corpus::{ChunkingConfig, ChunkingStrategy, TextSpan};
use crate::domain::DomainError;

/// Splits text into windows of at most `chunk_size` characters, cutting at
/// the most natural break inside each window
///
/// Break priority: paragraphs -> lines -> sentences -> words -> characters
#[derive(Debug, Clone, Default)]
pub struct RecursiveChunker;

impl RecursiveChunker {
    pub fn new() -> Self {
        Self
    }

    /// Char positions where a sentence starts
    fn sentence_starts(text: &str) -> Vec<usize> {
        let mut starts = Vec::new();
        let mut bounds = text
            .split_sentence_bound_indices()
            .map(|(byte_idx, _)| byte_idx)
            .peekable();

        for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
            while let Some(&b) = bounds.peek() {
                if b > byte_idx {
                    break;
                }
                if b == byte_idx && char_idx > 0 {
                    starts.push(char_idx);
                }
                bounds.next();
            }
        }

        starts
    }

    /// Latest position in `(lo, hi]` satisfying `is_break`
    fn last_break(lo: usize, hi: usize, is_break: impl Fn(usize) -> bool) -> Option<usize> {
        (lo + 1..=hi).rev().find(|&p| is_break(p))
    }

    fn find_end(chars: &[char], sentences: &[usize], lo: usize, hi: usize) -> usize {
        let after = |p: usize, s: &str| -> bool {
            let sep: Vec<char> = s.chars().collect();
            p >= sep.len() && chars[p - sep.len()..p] == sep[..]
        };

        Self::last_break(lo, hi, |p| after(p, "\n\n"))
            .or_else(|| Self::last_break(lo, hi, |p| after(p, "\n")))
            .or_else(|| {
                sentences
                    .iter()
                    .rev()
                    .find(|&&p| p > lo && p <= hi)
                    .copied()
            })
            .or_else(|| Self::last_break(lo, hi, |p| chars[p - 1].is_whitespace()))
            .unwrap_or(hi)
    }

    /// Move a chunk start forward to the next word start, staying below `end`
    fn snap_to_word(chars: &[char], start: usize, end: usize) -> usize {
        (start..end)
            .find(|&p| !chars[p].is_whitespace() && (p == 0 || chars[p - 1].is_whitespace()))
            .unwrap_or(start)
    }
}

impl ChunkingStrategy for RecursiveChunker {
    fn split(&self, text: &str, config: &ChunkingConfig) -> Result<Vec<TextSpan>, DomainError> {
        config.validate()?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let chars: Vec<char> = text.chars().collect();
        let sentences = Self::sentence_starts(text);
        let len = chars.len();

        let mut spans = Vec::new();
        let mut start = 0;

        loop {
            let window_end = (start + config.chunk_size).min(len);

            if window_end == len {
                spans.push(span(&chars, start, len));
                break;
            }

            // end > start + overlap keeps the next start moving forward
            let end = Self::find_end(&chars, &sentences, start + config.chunk_overlap, window_end);
            spans.push(span(&chars, start, end));

            let next = end - config.chunk_overlap;
            start = if config.chunk_overlap > 0 {
                Self::snap_to_word(&chars, next, end)
            } else {
                next
            };
        }

        Ok(spans)
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

fn span(chars: &[char], start: usize, end: usize) -> TextSpan {
    TextSpan::new(chars[start..end].iter().collect::<String>(), start, end)
}
