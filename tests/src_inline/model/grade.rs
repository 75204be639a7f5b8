use super::*;
use crate::model::rubric::Rubric;

#[test]
fn test_grade_bands() {
    let bands = Rubric::call_training_v1().grade_bands;
    assert_eq!(grade_for(8.0, &bands), Grade::Excellent);
    assert_eq!(grade_for(9.7, &bands), Grade::Excellent);
    assert_eq!(grade_for(7.99, &bands), Grade::Good);
    assert_eq!(grade_for(6.0, &bands), Grade::Good);
    assert_eq!(grade_for(5.99, &bands), Grade::NeedsWork);
    assert_eq!(grade_for(0.0, &bands), Grade::NeedsWork);
}

#[test]
fn test_performance_bands() {
    let bands = Rubric::call_training_v1().performance_bands;
    assert_eq!(performance_for(7.0, &bands), Performance::Good);
    assert_eq!(performance_for(6.9, &bands), Performance::Average);
    assert_eq!(performance_for(5.0, &bands), Performance::Average);
    assert_eq!(performance_for(4.5, &bands), Performance::NeedsWork);
}
