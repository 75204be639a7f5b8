pub mod category;
pub mod feedback;
pub mod grade;
pub mod payload;
pub mod rubric;
pub mod scores;
