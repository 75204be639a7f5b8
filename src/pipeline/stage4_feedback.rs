use crate::model::feedback::{CategoryFeedback, CategoryFeedbackMap, FeedbackOverall, Reasoning};
use crate::pipeline::patterns::{
    ARROW_PREFIX, BOLD_SPAN, BULLET_BOUNDARY, BULLET_MARKER, MARKUP_TAG, RubricPatterns,
    SECTION_END, TIP_BOUNDARY, TIP_HEADINGS, TIP_MARKER, collapse_whitespace,
};

pub const MIN_TIP_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Stage4Output {
    pub categories: CategoryFeedbackMap,
    pub overall: FeedbackOverall,
}

pub fn run_stage4(text: &str, patterns: &RubricPatterns) -> Stage4Output {
    Stage4Output {
        categories: parse_category_blocks(text, patterns),
        overall: FeedbackOverall {
            coaching_tips: extract_coaching_tips(text),
        },
    }
}

/// Walks header -> score -> reasoning, where reasoning runs to the next header,
/// a terminator heading, or the end of text. A later block with the same key wins.
pub fn parse_category_blocks(text: &str, patterns: &RubricPatterns) -> CategoryFeedbackMap {
    let mut out = CategoryFeedbackMap::new();
    let mut pos = 0usize;

    while pos <= text.len() {
        let Some(caps) = patterns.header.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(title), Some(number)) = (caps.get(0), caps.name("title"), caps.name("score"))
        else {
            break;
        };

        let reasoning_start = whole.end();
        let reasoning_end = patterns
            .boundary
            .find_at(text, reasoning_start)
            .map(|m| m.start())
            .unwrap_or(text.len());

        let key = patterns.resolve_key(title.as_str());
        let score = number.as_str().parse::<f64>().unwrap_or_else(|err| {
            tracing::debug!(key = %key, error = %err, "unparseable block score; using 0.0");
            0.0
        });
        let reasoning = render_reasoning(&text[reasoning_start..reasoning_end]);

        out.insert(
            key,
            CategoryFeedback {
                score,
                score_text: format!("{score:?}"),
                reasoning,
            },
        );

        // Headers always consume at least `N/10`, so this advances.
        pos = reasoning_end;
    }

    out
}

pub fn clean_reasoning(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_arrow = ARROW_PREFIX.replace(trimmed, "");
    collapse_whitespace(&without_arrow)
}

pub fn render_reasoning(raw: &str) -> Reasoning {
    let cleaned = clean_reasoning(raw);
    match split_bullets(&cleaned) {
        Some(items) => Reasoning::Bullets(items),
        None => Reasoning::Block(cleaned),
    }
}

/// `None` when the text has no bullet markers at all.
fn split_bullets(cleaned: &str) -> Option<Vec<String>> {
    let mut items = Vec::new();
    let mut found = false;
    let mut pos = 0usize;

    while let Some(marker) = BULLET_MARKER.find_at(cleaned, pos) {
        found = true;
        let item_start = marker.end();
        let item_end = BULLET_BOUNDARY
            .find_at(cleaned, item_start)
            .map(|m| m.start())
            .unwrap_or(cleaned.len());
        let item = MARKUP_TAG.replace_all(&cleaned[item_start..item_end], "");
        let item = item.trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
        pos = item_end;
    }

    found.then_some(items)
}

/// Tips from the first heading variant that yields any.
pub fn extract_coaching_tips(text: &str) -> Vec<String> {
    for heading in TIP_HEADINGS.iter() {
        let Some(found) = heading.find(text) else {
            continue;
        };
        let body_end = SECTION_END
            .find_at(text, found.end())
            .map(|m| m.start())
            .unwrap_or(text.len());
        let tips = tips_in_section(text[found.end()..body_end].trim());
        if !tips.is_empty() {
            return tips;
        }
    }
    Vec::new()
}

fn tips_in_section(section: &str) -> Vec<String> {
    let mut tips = Vec::new();
    let mut pos = 0usize;

    while let Some(marker) = TIP_MARKER.find_at(section, pos) {
        let item_start = marker.end();
        let item_end = TIP_BOUNDARY
            .find_at(section, item_start)
            .map(|m| m.start())
            .unwrap_or(section.len());
        if let Some(tip) = clean_tip(&section[item_start..item_end]) {
            tips.push(tip);
        }
        // Markers are never empty, so this always moves forward.
        pos = item_end;
    }

    tips
}

pub fn clean_tip(raw: &str) -> Option<String> {
    let collapsed = collapse_whitespace(raw.trim());
    let unwrapped = BOLD_SPAN.replace_all(&collapsed, "$1");
    // A marker like `1. **Tip** text` leaves one unpaired `**` behind.
    let unwrapped = unwrapped.replace("**", "");
    let tip = unwrapped.trim();
    if tip.chars().count() > MIN_TIP_CHARS {
        Some(tip.to_string())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_feedback.rs"]
mod tests;
