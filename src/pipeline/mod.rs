pub mod patterns;
pub mod stage1_payload;
pub mod stage2_extract;
pub mod stage3_normalize;
pub mod stage4_feedback;
pub mod stage5_overall;
pub mod stage6_tips;
pub mod stage7_report;
