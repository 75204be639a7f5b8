use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CallRubricError, Result};
use crate::model::rubric::Rubric;

// Fixed patterns. All matching goes through `regex`, so scan time stays linear
// in the input length whatever the evaluator sends.

pub static SCORE_OUT_OF_TEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]/10").unwrap());
pub static ARROW_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*→\s*").unwrap());
pub static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
pub static HEADER_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s&/]+").unwrap());
pub static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
pub static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Bullet marker inside a cleaned (single-line) reasoning span.
pub static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:•|-|\*|[0-9]+\.)\s+").unwrap());
/// Where a bullet item stops: the next marker character, whitespace or not.
pub static BULLET_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"•|-|\*|[0-9]+\.").unwrap());

/// Coaching-tips headings, tried in order.
pub static TIP_HEADINGS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?is)\*\*💡\s*Coaching Tips.*?:\*\*\s*\n").unwrap(),
        Regex::new(r"(?is)💡\s*COACHING TIPS.*?\n").unwrap(),
        Regex::new(r"(?is)\*\*COACHING TIPS.*?:\*\*\s*\n").unwrap(),
    ]
});
/// Next emphasized heading (`**Something:**`) closes a tips section.
pub static SECTION_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*[^*\n]*:\*\*").unwrap());
pub static TIP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(?:[0-9]+\.|\*|-|•)\s*\*?\*?").unwrap());
pub static TIP_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*(?:[0-9]+\.|\*|-|•)").unwrap());

/// Patterns derived from a `Rubric`. Built once, shared read-only.
#[derive(Debug, Clone)]
pub struct RubricPatterns {
    /// In rubric order.
    pub label_scores: Vec<(String, Regex)>,
    pub fragment: Regex,
    /// Captures `title` and `score`.
    pub header: Regex,
    pub boundary: Regex,
    pub synonyms: BTreeMap<String, String>,
}

impl RubricPatterns {
    pub fn compile(rubric: &Rubric) -> Result<Self> {
        let mut label_scores = Vec::with_capacity(rubric.categories.len());
        let mut alternatives = Vec::with_capacity(rubric.categories.len());
        let mut synonyms = BTreeMap::new();

        for def in &rubric.categories {
            let pattern = format!(
                r"(?i)(?:{})[:\s*]+(?P<score>[0-9]+(?:\.[0-9]+)?)",
                def.label_pattern
            );
            let regex = Regex::new(&pattern).map_err(|source| CallRubricError::Pattern {
                key: def.key.clone(),
                source,
            })?;
            label_scores.push((def.key.clone(), regex));
            alternatives.push(format!("(?:{})", def.label_pattern));

            synonyms.insert(normalize_header(&def.label), def.key.clone());
            for synonym in &def.synonyms {
                synonyms.insert(normalize_header(synonym), def.key.clone());
            }
        }

        let titles = alternatives.join("|");
        let header = Regex::new(&format!(
            r"(?i)[-*\s]*\*?\*?(?P<title>{titles})\*?\*?\s*:\s*\*?\*?\s*(?P<score>[0-9]+(?:\.[0-9]+)?)/10\*?\*?"
        ))
        .map_err(|e| CallRubricError::InvalidRubric(format!("header pattern: {e}")))?;

        let mut boundary = format!(r"(?i)[-*\s]*\*?\*?(?:{titles})\*?\*?\s*:");
        for terminator in &rubric.terminators {
            boundary.push('|');
            boundary.push_str(&regex::escape(terminator));
        }
        let boundary = Regex::new(&boundary)
            .map_err(|e| CallRubricError::InvalidRubric(format!("boundary pattern: {e}")))?;

        let fragment = Regex::new(&format!(
            r#"(?is)\{{[^}}]*"{}"[^}}]*\}}"#,
            regex::escape(&rubric.fragment_anchor)
        ))
        .map_err(|e| CallRubricError::InvalidRubric(format!("fragment pattern: {e}")))?;

        Ok(Self {
            label_scores,
            fragment,
            header,
            boundary,
            synonyms,
        })
    }

    /// Canonical key for a header title; unknown titles become `snake_case` keys.
    pub fn resolve_key(&self, title: &str) -> String {
        let normalized = normalize_header(title);
        match self.synonyms.get(&normalized) {
            Some(key) => key.clone(),
            None => normalized.replace(' ', "_"),
        }
    }
}

/// Lowercase, with runs of whitespace, `&` and `/` folded to one space.
pub fn normalize_header(title: &str) -> String {
    let lower = title.trim().to_lowercase();
    HEADER_SEPARATORS.replace_all(&lower, " ").into_owned()
}

/// Collapse every whitespace run (newlines included) into one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/patterns.rs"]
mod tests;
