//! Title/description splitting

use tracing::debug;

const SENTENCE_ENDINGS: [char; 3] = ['.', '!', '?'];

/// Title and optional description split out of free text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSplit {
    /// Leading subject
    pub title: String,

    /// Elaborating detail, absent when nothing remains
    pub description: Option<String>,
}

/// Separates the leading subject of text from its detail
///
/// Rules, first applicable wins:
/// 1. a separator on the first line, with text before it
/// 2. the first sentence, ended by `.`, `!` or `?`
/// 3. the first line
///
/// Leading blank lines are skipped so the "first line" always has content.
/// Whitespace-only text yields an empty title; callers reject that.
pub fn split_title(text: &str, separators: &[char]) -> TitleSplit {
    let content = skip_blank_lines(text);
    let (first_line, rest) = match content.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (content, None),
    };

    if let Some(split) = split_on_separator(first_line, rest, separators) {
        debug!("Title split on separator");
        return split;
    }

    if let Some(split) = split_on_sentence(content) {
        debug!("Title split on first sentence");
        return split;
    }

    TitleSplit {
        title: first_line.trim().to_string(),
        description: rest.and_then(non_empty),
    }
}

fn split_on_separator(first_line: &str, rest: Option<&str>, separators: &[char]) -> Option<TitleSplit> {
    let (index, separator) = first_line
        .char_indices()
        .find(|(_, c)| separators.contains(c))?;

    let title = first_line[..index].trim();
    if title.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    let after = first_line[index + separator.len_utf8()..].trim();
    if !after.is_empty() {
        parts.push(after);
    }
    if let Some(rest) = rest.map(str::trim).filter(|r| !r.is_empty()) {
        parts.push(rest);
    }

    Some(TitleSplit {
        title: title.to_string(),
        description: non_empty(&parts.join(" ")),
    })
}

/// The first sentence may run across line breaks, which stay in the title.
fn split_on_sentence(content: &str) -> Option<TitleSplit> {
    let index = content.find(SENTENCE_ENDINGS)?;
    let title = content[..index].trim();
    if title.is_empty() {
        return None;
    }

    // Sentence endings are all one byte wide
    Some(TitleSplit {
        title: title.to_string(),
        description: non_empty(&content[index + 1..]),
    })
}

fn skip_blank_lines(text: &str) -> &str {
    let mut rest = text;
    while let Some((line, tail)) = rest.split_once('\n') {
        if !line.trim().is_empty() {
            break;
        }
        rest = tail;
    }
    rest
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
