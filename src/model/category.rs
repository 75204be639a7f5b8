use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    ProductKnowledge,
    CostsBooking,
    ToneVoice,
    ObjectionHandling,
    CallControl,
}

impl ScoreCategory {
    pub fn key(self) -> &'static str {
        match self {
            ScoreCategory::ProductKnowledge => "product_knowledge",
            ScoreCategory::CostsBooking => "costs_booking",
            ScoreCategory::ToneVoice => "tone_voice",
            ScoreCategory::ObjectionHandling => "objection_handling",
            ScoreCategory::CallControl => "call_control",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::ProductKnowledge => "Product Knowledge",
            ScoreCategory::CostsBooking => "Costs & Booking",
            ScoreCategory::ToneVoice => "Tone of Voice",
            ScoreCategory::ObjectionHandling => "Objection Handling",
            ScoreCategory::CallControl => "Call Control/Flow",
        }
    }
}

pub fn category_order() -> &'static [ScoreCategory] {
    &[
        ScoreCategory::ProductKnowledge,
        ScoreCategory::CostsBooking,
        ScoreCategory::ToneVoice,
        ScoreCategory::ObjectionHandling,
        ScoreCategory::CallControl,
    ]
}
