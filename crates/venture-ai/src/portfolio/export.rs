use std::io::Write;

use serde::Serialize;

use super::domain::VentureRecord;
use super::insights::InsightResult;
use super::scoring::ScoreResult;

#[derive(Debug, Serialize)]
struct PortfolioCsvRow<'a> {
    id: &'a str,
    name: &'a str,
    sector: &'a str,
    stage: &'a str,
    gedsi_score: u8,
    impact_score: u8,
    readiness_score: u8,
    risk_level: &'a str,
    priority: &'a str,
    next_action: &'a str,
    alerts: String,
}

/// Write scored ventures as CSV for reporting exports. Alerts are joined
/// with `; ` so each venture stays on one row.
pub fn write_portfolio_csv<W: Write>(
    sink: W,
    rows: &[(&VentureRecord, &ScoreResult, &InsightResult)],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(sink);

    for (record, scores, insights) in rows {
        writer.serialize(PortfolioCsvRow {
            id: &record.id,
            name: &record.name,
            sector: &record.sector,
            stage: record.stage.label(),
            gedsi_score: scores.gedsi_score,
            impact_score: scores.impact_score,
            readiness_score: scores.readiness_score,
            risk_level: insights.risk_level.label(),
            priority: insights.priority.label(),
            next_action: &insights.next_action,
            alerts: insights.alerts.join("; "),
        })?;
    }

    writer.flush()?;
    Ok(())
}
