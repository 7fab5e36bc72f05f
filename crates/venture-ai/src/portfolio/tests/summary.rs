use super::common::*;
use serde_json::json;

use crate::portfolio::domain::VentureStage;
use crate::portfolio::scoring::ScoreResult;
use crate::portfolio::summary::aggregate_portfolio;

fn scores(gedsi: u8, impact: u8, readiness: u8) -> ScoreResult {
    ScoreResult {
        gedsi_score: gedsi,
        impact_score: impact,
        readiness_score: readiness,
    }
}

#[test]
fn empty_portfolio_aggregates_to_zeroes() {
    let summary = aggregate_portfolio(&[]);

    assert_eq!(summary.venture_count, 0);
    assert_eq!(summary.average_gedsi_score, 0.0);
    assert_eq!(summary.average_impact_score, 0.0);
    assert_eq!(summary.average_readiness_score, 0.0);
    assert_eq!(summary.total_revenue, 0.0);
    assert!(summary.sector_breakdown.is_empty());
    assert!(summary.stage_breakdown.is_empty());
    assert!(summary.category_breakdown.is_empty());
}

#[test]
fn averages_and_totals_cover_the_whole_batch() {
    let first = record_from(json!({
        "id": "ven-a",
        "name": "A",
        "sector": "CleanTech",
        "stage": "SERIES_B",
        "revenue": 100_000,
        "fundingRaised": 500_000,
        "gedsiMetrics": [
            { "goal": "OI.1", "category": "gender", "status": "VERIFIED" },
            { "goal": "OI.2", "category": "gender", "status": "PENDING" }
        ]
    }));
    let second = record_from(json!({
        "id": "ven-b",
        "name": "B",
        "sector": "Agriculture",
        "stage": "INTAKE",
        "revenue": "$50,000",
        "gedsiMetrics": [
            { "goal": "OI.3", "category": "inclusion", "status": "COMPLETED" }
        ]
    }));
    let first_scores = scores(80, 60, 40);
    let second_scores = scores(60, 40, 20);

    let summary = aggregate_portfolio(&[(&first, &first_scores), (&second, &second_scores)]);

    assert_eq!(summary.venture_count, 2);
    assert_eq!(summary.average_gedsi_score, 70.0);
    assert_eq!(summary.average_impact_score, 50.0);
    assert_eq!(summary.average_readiness_score, 30.0);
    assert_eq!(summary.total_revenue, 150_000.0);
    assert_eq!(summary.total_funding_raised, 500_000.0);
    assert_eq!(summary.metrics_recorded, 3);
    assert_eq!(summary.metrics_fulfilled, 2);
}

#[test]
fn stage_breakdown_follows_the_pipeline_order() {
    let late = record_from(json!({
        "id": "ven-late",
        "name": "Late",
        "sector": "CleanTech",
        "stage": "SERIES_B"
    }));
    let early = record_from(json!({
        "id": "ven-early",
        "name": "Early",
        "sector": "CleanTech",
        "stage": "INTAKE"
    }));
    let late_scores = scores(70, 70, 70);
    let early_scores = scores(50, 50, 50);

    let summary = aggregate_portfolio(&[(&late, &late_scores), (&early, &early_scores)]);

    let stages: Vec<VentureStage> = summary
        .stage_breakdown
        .iter()
        .map(|entry| entry.stage)
        .collect();
    assert_eq!(stages, vec![VentureStage::Intake, VentureStage::SeriesB]);
    assert_eq!(summary.stage_breakdown[0].stage_label, "Intake");
    assert_eq!(summary.stage_breakdown[0].ventures, 1);
}

#[test]
fn blank_sectors_group_under_unspecified() {
    let record = record_from(json!({
        "id": "ven-blank",
        "name": "Blank Sector",
        "sector": "   ",
        "stage": "SEED"
    }));
    let record_scores = scores(70, 70, 70);

    let summary = aggregate_portfolio(&[(&record, &record_scores)]);

    assert_eq!(summary.sector_breakdown.len(), 1);
    assert_eq!(summary.sector_breakdown[0].sector, "Unspecified");
    assert_eq!(summary.sector_breakdown[0].metric_completion_pct, 0.0);
}

#[test]
fn category_breakdown_groups_metric_categories_case_insensitively() {
    let record = record_from(json!({
        "id": "ven-categories",
        "name": "Categories",
        "sector": "CleanTech",
        "stage": "SEED",
        "gedsiMetrics": [
            { "goal": "OI.1", "category": "Gender", "status": "VERIFIED" },
            { "goal": "OI.2", "category": "gender", "status": "PENDING" },
            { "goal": "OI.3", "category": " GENDER ", "status": "COMPLETED" },
            { "goal": "OI.4", "category": "", "status": "VERIFIED" }
        ]
    }));
    let record_scores = scores(70, 70, 70);

    let summary = aggregate_portfolio(&[(&record, &record_scores)]);

    assert_eq!(summary.category_breakdown.len(), 2);
    let gender = summary
        .category_breakdown
        .iter()
        .find(|entry| entry.category == "gender")
        .expect("gender category present");
    assert_eq!(gender.metrics, 3);
    assert_eq!(gender.fulfilled, 2);
    assert!((gender.completion_pct - 66.666).abs() < 0.01);

    let uncategorized = summary
        .category_breakdown
        .iter()
        .find(|entry| entry.category == "uncategorized")
        .expect("uncategorized bucket present");
    assert_eq!(uncategorized.completion_pct, 100.0);
}

#[test]
fn per_group_completion_uses_the_group_metric_counts() {
    let strong = record_from(json!({
        "id": "ven-strong",
        "name": "Strong",
        "sector": "CleanTech",
        "stage": "SEED",
        "gedsiMetrics": [
            { "goal": "OI.1", "category": "gender", "status": "VERIFIED" },
            { "goal": "OI.2", "category": "gender", "status": "VERIFIED" }
        ]
    }));
    let weak = record_from(json!({
        "id": "ven-weak",
        "name": "Weak",
        "sector": "Agriculture",
        "stage": "SEED",
        "gedsiMetrics": [
            { "goal": "OI.3", "category": "inclusion", "status": "PENDING" }
        ]
    }));
    let strong_scores = scores(90, 80, 70);
    let weak_scores = scores(40, 40, 40);

    let summary = aggregate_portfolio(&[(&strong, &strong_scores), (&weak, &weak_scores)]);

    let cleantech = summary
        .sector_breakdown
        .iter()
        .find(|entry| entry.sector == "CleanTech")
        .expect("cleantech entry");
    assert_eq!(cleantech.metric_completion_pct, 100.0);

    let agriculture = summary
        .sector_breakdown
        .iter()
        .find(|entry| entry.sector == "Agriculture")
        .expect("agriculture entry");
    assert_eq!(agriculture.metric_completion_pct, 0.0);
}
