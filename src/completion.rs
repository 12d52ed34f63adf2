//! Prefix-based tab completion over the live vocabulary.
//!
//! Only the last whitespace token of the input is completed; anything
//! before it passes through untouched. A single match is completed fully
//! and gets a trailing space; multiple matches collapse to their longest
//! common prefix and leave the cursor hot.

use indexmap::IndexSet;

/// Result of a completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The full reconstructed input line
    pub line: String,
    /// Whether anything matched (the editor only rewrites when true)
    pub replaced: bool,
}

/// Complete the last token of `partial` against `vocabulary`.
///
/// An empty input counts as an empty last token and matches the whole
/// vocabulary.
pub fn complete(partial: &str, vocabulary: &IndexSet<String>) -> Completion {
    let words: Vec<&str> = partial.split_whitespace().collect();
    let last_word = words.last().copied().unwrap_or("");

    let candidates: Vec<&str> = vocabulary
        .iter()
        .map(|w| w.as_str())
        .filter(|w| w.starts_with(last_word))
        .collect();

    let replacement = match candidates.len() {
        0 => {
            return Completion {
                line: partial.to_string(),
                replaced: false,
            }
        }
        // unambiguous: complete the word and start the next one
        1 => format!("{} ", candidates[0]),
        // ambiguous: back off to the longest prefix shared by every candidate
        _ => longest_common_prefix(&candidates),
    };

    let mut line = String::new();
    let leading = words.len().saturating_sub(1);
    for word in &words[..leading] {
        line.push_str(word);
        line.push(' ');
    }
    line.push_str(&replacement);

    Completion {
        line,
        replaced: true,
    }
}

/// Longest prefix shared by all candidates, grown one character at a time
fn longest_common_prefix(candidates: &[&str]) -> String {
    let shortest = candidates
        .iter()
        .map(|c| c.chars().count())
        .min()
        .unwrap_or(0);
    let first: Vec<char> = candidates[0].chars().collect();

    let mut end = 0;
    for i in 1..=shortest {
        let prefix: String = first[..i].iter().collect();
        if candidates.iter().all(|c| c.starts_with(&prefix)) {
            end = i;
        } else {
            break;
        }
    }

    first[..end].iter().collect()
}
