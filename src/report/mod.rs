//! Daily report: average risk, status classification and the plain-text
//! summary handed to rangers.

use serde::Serialize;

use crate::types::{RiskRow, RiskStatus};

/// Average risk of a scored series and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskSummary {
    pub average_risk: f64,
    pub status: RiskStatus,
    pub rows: usize,
}

/// Reduce a scored series to a summary. `None` when there is nothing to summarise.
pub fn summarize<T>(rows: &[RiskRow<T>]) -> Option<RiskSummary> {
    if rows.is_empty() {
        return None;
    }
    let total: f64 = rows.iter().map(|r| r.risk_score).sum();
    let average_risk = total / rows.len() as f64;
    Some(RiskSummary {
        average_risk,
        status: RiskStatus::from_average(average_risk),
        rows: rows.len(),
    })
}

const TITLE: &str = "--- FOREST SENTINEL DAILY REPORT ---";
const RULE: &str = "------------------------------------";
const CLOSURE_DIRECTIVE: &str = ">> CLOSE TRAILS IMMEDIATELY. NO FIRES.";
const MONITORING_DIRECTIVE: &str = ">> STANDARD MONITORING ACTIVE.";

/// Text report for one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub location: String,
    pub station_id: String,
    pub summary: RiskSummary,
}

impl DailyReport {
    pub fn new(
        location: impl Into<String>,
        station_id: impl Into<String>,
        summary: RiskSummary,
    ) -> Self {
        Self {
            location: location.into(),
            station_id: station_id.into(),
            summary,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self.summary.status {
            RiskStatus::Critical => CLOSURE_DIRECTIVE,
            RiskStatus::Low | RiskStatus::Moderate => MONITORING_DIRECTIVE,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{TITLE}\n\
             Location: {} (Station {})\n\
             Average Risk Score: {:.2}\n\
             Status: {}\n\
             {RULE}\n\
             RECOMMENDATION:\n\
             {}\n",
            self.location,
            self.station_id,
            self.summary.average_risk,
            self.summary.status,
            self.recommendation(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(scores: &[f64]) -> Vec<RiskRow<()>> {
        scores
            .iter()
            .map(|&risk_score| RiskRow {
                observation: (),
                risk_score,
            })
            .collect()
    }

    #[test]
    fn test_empty_has_no_summary() {
        assert!(summarize::<()>(&[]).is_none());
    }

    #[test]
    fn test_average_and_status() {
        let summary = summarize(&rows(&[30.0, 50.0])).expect("non-empty");
        assert_eq!(summary.average_risk, 40.0);
        assert_eq!(summary.status, RiskStatus::Moderate);
        assert_eq!(summary.rows, 2);

        let summary = summarize(&rows(&[70.0, 70.0])).expect("non-empty");
        assert_eq!(summary.status, RiskStatus::Moderate);

        let summary = summarize(&rows(&[90.0, 60.0])).expect("non-empty");
        assert_eq!(summary.status, RiskStatus::Critical);
    }

    #[test]
    fn test_render_critical() {
        let summary = summarize(&rows(&[80.0, 71.0])).expect("non-empty");
        let report = DailyReport::new("Lough Ouler", "9820", summary);
        assert_eq!(
            report.render(),
            "--- FOREST SENTINEL DAILY REPORT ---\n\
             Location: Lough Ouler (Station 9820)\n\
             Average Risk Score: 75.50\n\
             Status: CRITICAL\n\
             ------------------------------------\n\
             RECOMMENDATION:\n\
             >> CLOSE TRAILS IMMEDIATELY. NO FIRES.\n"
        );
    }

    #[test]
    fn test_render_low_recommends_monitoring() {
        let summary = summarize(&rows(&[12.5])).expect("non-empty");
        let text = DailyReport::new("Lough Ouler", "9820", summary).render();
        assert!(text.contains("Average Risk Score: 12.50"));
        assert!(text.contains("Status: LOW"));
        assert!(text.ends_with(">> STANDARD MONITORING ACTIVE.\n"));
    }
}
