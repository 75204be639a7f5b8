use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{CallRubricError, Result};
use crate::evaluator::Evaluator;
use crate::model::payload::EvaluationPayload;
use crate::model::scores::RubricScores;
use crate::pipeline::stage6_tips::evaluation_tips;
use crate::report::{EvaluationReport, FeedbackEntry, ReportStatus, TipsReport};

pub const TOOL_NAME: &str = "callrubric";

pub fn build_report(evaluator: &Evaluator, payload: &EvaluationPayload) -> EvaluationReport {
    let rubric = evaluator.rubric();
    let mut report = EvaluationReport {
        tool: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        rubric: rubric.name.clone(),
        status: ReportStatus::NoEvaluationData,
        source: None,
        scores: RubricScores::new(),
        extra_scores: RubricScores::new(),
        overall: None,
        grade: None,
        breakdown: Vec::new(),
        missing_categories: Vec::new(),
        feedback: BTreeMap::new(),
        coaching_tips: Vec::new(),
    };

    let Some(evaluation) = evaluator.extract(payload) else {
        return report;
    };

    report.status = ReportStatus::Evaluated;
    report.source = Some(evaluation.source);
    for (key, value) in &evaluation.scores {
        if rubric.category(key).is_some() {
            report.scores.insert(key.clone(), *value);
        } else {
            report.extra_scores.insert(key.clone(), *value);
        }
    }

    if !evaluation.scores.is_empty() {
        let breakdown = evaluator.breakdown(&evaluation.scores);
        report.overall = Some(breakdown.overall);
        report.grade = Some(breakdown.grade);
        report.breakdown = breakdown.rows;
        report.missing_categories = breakdown.missing_categories;
    }

    let (categories, _) = evaluator.parse_feedback(&evaluation.additional_data.detailed_feedback);
    report.feedback = categories
        .into_iter()
        .map(|(key, entry)| {
            (
                key,
                FeedbackEntry {
                    score_text: entry.score_text,
                    reasoning: entry.reasoning.to_html(),
                },
            )
        })
        .collect();

    report.coaching_tips = evaluation_tips(&evaluation);
    report
}

pub fn build_tips_report(evaluator: &Evaluator, payload: &EvaluationPayload) -> TipsReport {
    let (overall, tips) = evaluator.aggregate(payload);
    TipsReport { overall, tips }
}

/// Writes to `out`, or to stdout when `out` is `None`.
pub fn write_output(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CallRubricError::io(parent, e))?;
            }
            fs::write(path, content).map_err(|e| CallRubricError::io(path, e))?;
            tracing::info!("report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CallRubricError::io("<stdout>", e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
