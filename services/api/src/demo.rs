use crate::infra::{default_scoring_config, InMemoryVentureRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use venture_ai::error::AppError;
use venture_ai::portfolio::{
    aggregate_portfolio, write_portfolio_csv, InsightResult, PortfolioAnalysisService,
    PortfolioSummary, ScoreResult, ScoringEngine, VentureRecord,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the analysis date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the scored portfolio to a CSV file after the demo run.
    #[arg(long)]
    pub(crate) csv_out: Option<PathBuf>,
    /// Skip the portfolio rollup portion of the demo.
    #[arg(long)]
    pub(crate) skip_rollup: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct PortfolioReportArgs {
    /// Override the analysis date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the scored portfolio to a CSV file alongside the printed report.
    #[arg(long)]
    pub(crate) csv_out: Option<PathBuf>,
}

pub(crate) fn run_portfolio_report(args: PortfolioReportArgs) -> Result<(), AppError> {
    let PortfolioReportArgs { today, csv_out } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let engine = ScoringEngine::new(default_scoring_config());
    let ventures = sample_ventures();

    println!("Portfolio report ({today})");
    let scored: Vec<(VentureRecord, ScoreResult, InsightResult)> = ventures
        .into_iter()
        .map(|record| {
            let scores = engine.compute_scores(&record);
            let insights = engine.compute_insights(&record, &scores);
            (record, scores, insights)
        })
        .collect();

    for (record, scores, insights) in &scored {
        render_venture(record, scores, insights);
    }

    let pairs: Vec<_> = scored
        .iter()
        .map(|(record, scores, _)| (record, scores))
        .collect();
    render_summary(&aggregate_portfolio(&pairs));

    if let Some(path) = csv_out {
        export_csv(&path, &scored)?;
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        csv_out,
        skip_rollup,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Venture portfolio demo ({today})");
    println!("\nVenture intake and analysis");

    let repository = Arc::new(InMemoryVentureRepository::default());
    let service = Arc::new(PortfolioAnalysisService::new(
        repository,
        default_scoring_config(),
    ));

    let mut scored: Vec<(VentureRecord, ScoreResult, InsightResult)> = Vec::new();
    for record in sample_ventures() {
        let snapshot = match service.register(record) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                println!("  Registration rejected: {err}");
                continue;
            }
        };
        let view = snapshot.status_view();
        println!(
            "- Registered {} ({}) -> {}",
            snapshot.record.name, view.venture_id.0, view.next_action
        );

        let analysis = match service.analyze(&snapshot.venture_id(), today) {
            Ok(analysis) => analysis,
            Err(err) => {
                println!("  Analysis unavailable: {err}");
                continue;
            }
        };
        render_venture(&snapshot.record, &analysis.scores, &analysis.insights);
        println!("  Action due: {}", analysis.action_due);
        scored.push((snapshot.record, analysis.scores, analysis.insights));
    }

    if !skip_rollup {
        match service.portfolio_summary() {
            Ok(summary) => render_summary(&summary),
            Err(err) => println!("\nPortfolio rollup unavailable: {err}"),
        }
    }

    if let Some(path) = csv_out {
        export_csv(&path, &scored)?;
    }

    Ok(())
}

fn render_venture(record: &VentureRecord, scores: &ScoreResult, insights: &InsightResult) {
    println!(
        "- {} | {} | {}",
        record.name,
        record.sector,
        record.stage.label()
    );
    println!(
        "  Scores: GEDSI {} | impact {} | readiness {}",
        scores.gedsi_score, scores.impact_score, scores.readiness_score
    );
    println!(
        "  Risk {} | priority {} | next: {} (within {} days)",
        insights.risk_level.label(),
        insights.priority.label(),
        insights.next_action,
        insights.days_until_action
    );
    if insights.alerts.is_empty() {
        println!("  Alerts: none");
    } else {
        for alert in &insights.alerts {
            println!("  Alert: {alert}");
        }
    }
}

fn render_summary(summary: &PortfolioSummary) {
    println!("\nPortfolio rollup ({} ventures)", summary.venture_count);
    println!(
        "- Average scores: GEDSI {:.1} | impact {:.1} | readiness {:.1}",
        summary.average_gedsi_score, summary.average_impact_score, summary.average_readiness_score
    );
    println!(
        "- Totals: revenue ${:.0} | funding raised ${:.0}",
        summary.total_revenue, summary.total_funding_raised
    );
    println!(
        "- GEDSI metrics: {} recorded, {} fulfilled",
        summary.metrics_recorded, summary.metrics_fulfilled
    );

    println!("Sector breakdown:");
    for entry in &summary.sector_breakdown {
        println!(
            "  - {}: {} ventures | {:.0}% metric completion",
            entry.sector, entry.ventures, entry.metric_completion_pct
        );
    }

    println!("Stage breakdown:");
    for entry in &summary.stage_breakdown {
        println!(
            "  - {}: {} ventures | {:.0}% metric completion",
            entry.stage_label, entry.ventures, entry.metric_completion_pct
        );
    }

    if !summary.category_breakdown.is_empty() {
        println!("GEDSI category breakdown:");
        for entry in &summary.category_breakdown {
            println!(
                "  - {}: {}/{} fulfilled ({:.0}%)",
                entry.category, entry.fulfilled, entry.metrics, entry.completion_pct
            );
        }
    }
}

fn export_csv(
    path: &PathBuf,
    scored: &[(VentureRecord, ScoreResult, InsightResult)],
) -> Result<(), AppError> {
    let rows: Vec<_> = scored
        .iter()
        .map(|(record, scores, insights)| (record, scores, insights))
        .collect();
    let file = File::create(path)?;
    write_portfolio_csv(file, &rows)?;
    println!("\nWrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Deterministic sample ventures covering the shapes the engine must absorb:
/// a fully verified later-stage venture, a field-heavy one with string-encoded
/// amounts, a bare intake record, and one carrying a prior AI advisory.
pub(crate) fn sample_ventures() -> Vec<VentureRecord> {
    let records = serde_json::json!([
        {
            "id": "ven-solar-01",
            "name": "Solar Sisters",
            "sector": "CleanTech",
            "stage": "SERIES_B",
            "revenue": 1_000_000,
            "fundingRaised": 2_000_000,
            "teamSize": 15,
            "founderTypes": ["women-led", "disability-inclusive"],
            "gedsiGoals": ["OI.1", "OI.2", "OI.3"],
            "operationalReadiness": { "governance": true, "financial_systems": true, "hr_policies": true },
            "capitalReadiness": { "pitch_deck": true, "data_room": true, "cap_table": true },
            "gedsiMetrics": [
                { "goal": "OI.1", "category": "gender", "status": "VERIFIED" },
                { "goal": "OI.2", "category": "gender", "status": "VERIFIED" },
                { "goal": "OI.3", "category": "disability", "status": "VERIFIED" },
                { "goal": "OI.1", "category": "gender", "status": "VERIFIED" },
                { "goal": "OI.2", "category": "inclusion", "status": "VERIFIED" }
            ],
            "documentCount": 8,
            "activityCount": 14,
            "capitalActivityCount": 4,
            "website": "https://solarsisters.example",
            "pitchSummary": "Distributed solar franchises run by women entrepreneurs across rural districts, pairing asset finance with training and after-sales service networks."
        },
        {
            "id": "ven-agri-02",
            "name": "AgriReach",
            "sector": "Agriculture",
            "stage": "SEED",
            "revenue": "$250,000",
            "fundingRaised": "400000",
            "teamSize": "6",
            "founderTypes": "[\"rural-focus\", \"youth-led\"]",
            "gedsiGoals": "[\"OI.4\", \"OI.5\"]",
            "operationalReadiness": { "governance": true, "financial_systems": false },
            "capitalReadiness": {},
            "gedsiMetrics": [
                { "goal": "OI.4", "category": "rural inclusion", "status": "COMPLETED" },
                { "goal": "OI.5", "category": "rural inclusion", "status": "IN_PROGRESS" }
            ],
            "documentCount": 3,
            "activityCount": 5,
            "capitalActivityCount": 1,
            "website": "https://agrireach.example",
            "pitchSummary": "Last-mile input delivery for smallholders."
        },
        {
            "id": "ven-north-03",
            "name": "Northside Labs",
            "sector": "",
            "stage": "INTAKE",
            "documentCount": 0,
            "activityCount": 0,
            "capitalActivityCount": 0
        },
        {
            "id": "ven-care-04",
            "name": "CarePath",
            "sector": "HealthTech",
            "stage": "DUE_DILIGENCE",
            "revenue": 120_000,
            "fundingRaised": 250_000,
            "teamSize": 4,
            "founderTypes": ["women-led"],
            "gedsiGoals": ["OI.6"],
            "operationalReadiness": { "governance": true, "financial_systems": true },
            "capitalReadiness": { "pitch_deck": true },
            "gedsiMetrics": [
                { "goal": "OI.6", "category": "gender", "status": "COMPLETED" }
            ],
            "documentCount": 4,
            "activityCount": 7,
            "capitalActivityCount": 2,
            "aiAnalysis": {
                "riskAssessment": "Medium risk: customer concentration in two hospital groups.",
                "recommendations": [
                    "Diversify the hospital partner pipeline before the next raise",
                    "Formalize clinical advisory board"
                ],
                "alerts": [
                    "Customer concentration above 60%",
                    "Clinical advisory roles unfilled"
                ]
            },
            "website": "https://carepath.example",
            "pitchSummary": "Care coordination platform for community health workers, bridging referrals between clinics and hospital systems with offline-first tooling."
        }
    ]);

    serde_json::from_value(records).expect("sample ventures deserialize")
}
