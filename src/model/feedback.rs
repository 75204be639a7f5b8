use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Reasoning {
    Bullets(Vec<String>),
    Block(String),
}

impl Reasoning {
    pub fn to_html(&self) -> String {
        match self {
            Reasoning::Bullets(items) => {
                let mut out = String::from("<ul>");
                for item in items {
                    out.push_str("<li>");
                    out.push_str(item);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
                out
            }
            Reasoning::Block(text) => format!("<p>{text}</p>"),
        }
    }

    /// Plain text without markup; items joined by single spaces.
    pub fn to_plain(&self) -> String {
        match self {
            Reasoning::Bullets(items) => items.join(" "),
            Reasoning::Block(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFeedback {
    pub score: f64,
    pub score_text: String,
    pub reasoning: Reasoning,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackOverall {
    pub coaching_tips: Vec<String>,
}

pub type CategoryFeedbackMap = BTreeMap<String, CategoryFeedback>;
