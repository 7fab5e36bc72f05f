//! Portfolio-level rollup across scored ventures. The summary is a view:
//! recomputed fresh from the batch on every call, never mutated in place.

use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{VentureRecord, VentureStage};
use super::normalizer::NormalizedFields;
use super::scoring::ScoreResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub venture_count: usize,
    pub average_gedsi_score: f64,
    pub average_impact_score: f64,
    pub average_readiness_score: f64,
    pub total_revenue: f64,
    pub total_funding_raised: f64,
    pub metrics_recorded: usize,
    pub metrics_fulfilled: usize,
    pub sector_breakdown: Vec<SectorBreakdownEntry>,
    pub stage_breakdown: Vec<StageBreakdownEntry>,
    pub category_breakdown: Vec<CategoryBreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorBreakdownEntry {
    pub sector: String,
    pub ventures: usize,
    pub metric_completion_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageBreakdownEntry {
    pub stage: VentureStage,
    pub stage_label: &'static str,
    pub ventures: usize,
    pub metric_completion_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdownEntry {
    pub category: String,
    pub metrics: usize,
    pub fulfilled: usize,
    pub completion_pct: f64,
}

#[derive(Default)]
struct GroupTally {
    ventures: usize,
    metrics: usize,
    fulfilled: usize,
}

/// Reduce a batch of scored ventures into portfolio-wide statistics.
/// An empty batch yields zeroed averages, never NaN.
pub fn aggregate_portfolio(entries: &[(&VentureRecord, &ScoreResult)]) -> PortfolioSummary {
    let venture_count = entries.len();

    let mut gedsi_sum = 0.0;
    let mut impact_sum = 0.0;
    let mut readiness_sum = 0.0;
    let mut total_revenue = 0.0;
    let mut total_funding_raised = 0.0;
    let mut metrics_recorded = 0;
    let mut metrics_fulfilled = 0;

    let mut sectors: BTreeMap<String, GroupTally> = BTreeMap::new();
    let mut stages: BTreeMap<VentureStage, GroupTally> = BTreeMap::new();
    let mut categories: BTreeMap<String, GroupTally> = BTreeMap::new();

    for (record, scores) in entries {
        gedsi_sum += f64::from(scores.gedsi_score);
        impact_sum += f64::from(scores.impact_score);
        readiness_sum += f64::from(scores.readiness_score);

        let fields = NormalizedFields::from_record(record);
        total_revenue += fields.revenue;
        total_funding_raised += fields.funding_raised;

        let fulfilled = record
            .gedsi_metrics
            .iter()
            .filter(|metric| metric.status.is_fulfilled())
            .count();
        metrics_recorded += record.gedsi_metrics.len();
        metrics_fulfilled += fulfilled;

        let sector_tally = sectors.entry(sector_key(&record.sector)).or_default();
        sector_tally.ventures += 1;
        sector_tally.metrics += record.gedsi_metrics.len();
        sector_tally.fulfilled += fulfilled;

        let stage_tally = stages.entry(record.stage).or_default();
        stage_tally.ventures += 1;
        stage_tally.metrics += record.gedsi_metrics.len();
        stage_tally.fulfilled += fulfilled;

        for metric in &record.gedsi_metrics {
            let category_tally = categories.entry(category_key(&metric.category)).or_default();
            category_tally.metrics += 1;
            if metric.status.is_fulfilled() {
                category_tally.fulfilled += 1;
            }
        }
    }

    let sector_breakdown = sectors
        .into_iter()
        .map(|(sector, tally)| SectorBreakdownEntry {
            sector,
            ventures: tally.ventures,
            metric_completion_pct: completion_pct(tally.fulfilled, tally.metrics),
        })
        .collect();

    let stage_breakdown = VentureStage::ordered()
        .into_iter()
        .filter_map(|stage| {
            stages.get(&stage).map(|tally| StageBreakdownEntry {
                stage,
                stage_label: stage.label(),
                ventures: tally.ventures,
                metric_completion_pct: completion_pct(tally.fulfilled, tally.metrics),
            })
        })
        .collect();

    let category_breakdown = categories
        .into_iter()
        .map(|(category, tally)| CategoryBreakdownEntry {
            category,
            metrics: tally.metrics,
            fulfilled: tally.fulfilled,
            completion_pct: completion_pct(tally.fulfilled, tally.metrics),
        })
        .collect();

    PortfolioSummary {
        venture_count,
        average_gedsi_score: mean(gedsi_sum, venture_count),
        average_impact_score: mean(impact_sum, venture_count),
        average_readiness_score: mean(readiness_sum, venture_count),
        total_revenue,
        total_funding_raised,
        metrics_recorded,
        metrics_fulfilled,
        sector_breakdown,
        stage_breakdown,
        category_breakdown,
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn completion_pct(fulfilled: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        fulfilled as f64 / total as f64 * 100.0
    }
}

fn sector_key(sector: &str) -> String {
    let trimmed = sector.trim();
    if trimmed.is_empty() {
        "Unspecified".to_string()
    } else {
        trimmed.to_string()
    }
}

fn category_key(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        "uncategorized".to_string()
    } else {
        trimmed.to_ascii_lowercase()
    }
}
