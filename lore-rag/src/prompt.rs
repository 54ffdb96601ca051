//! Excerpt cleanup and prompt assembly.

use std::sync::LazyLock;

use regex::Regex;

use crate::search::ScoredDocument;

static NUMBERED_POINTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n?\s*\d+[.)]\s*").expect("valid regex"));
static BULLETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[•\-–▪]").expect("valid regex"));
static TRAILING_REFERENCES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)\n\s*References?\s*:\s*$").expect("valid regex"));

/// Truncate to at most `budget` characters, on a char boundary.
pub fn excerpt(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Strip list formatting and a trailing references section.
///
/// Articles come from list-heavy blog markup; numbered points and bullet
/// glyphs confuse the completion model more than they help it.
pub fn clean_excerpt(text: &str) -> String {
    let text = NUMBERED_POINTS.replace_all(text, " ");
    let text = BULLETS.replace_all(&text, " ");
    let text = TRAILING_REFERENCES.replace_all(&text, "");
    text.trim().to_string()
}

/// Assemble the grounded prompt from the selected documents.
///
/// Each document contributes a cleaned excerpt of at most `budget`
/// characters; the instruction block tells the model to answer only from
/// the excerpts and to say when they do not cover the question.
pub fn build_prompt(question: &str, selected: &[ScoredDocument], budget: usize) -> String {
    let context = selected
        .iter()
        .map(|result| clean_excerpt(excerpt(&result.document.content, budget)))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "The following excerpts are from published articles:\n\n\
         {context}\n\n\
         Answer the question using only the excerpts above. Include names, numbers, and study \
         references exactly as they appear. If the excerpts do not cover the question, say so \
         plainly instead of guessing.\n\n\
         Question: {question}\n\n\
         Answer:"
    )
}
