//! Investment memo for a single deal.

use crate::export::ExportedDocument;
use crate::model::deal::{Deal, Evidence, ScoreBand};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static FILENAME_UNSAFE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s/\\]+").expect("valid filename regex"));

/// `CloudSync AI` -> `CloudSync_AI_investment_memo.md`.
///
/// Whitespace runs and path separators become `_`, so the result is always a
/// single path component.
pub fn memo_filename(deal_name: &str) -> String {
    format!(
        "{}_investment_memo.md",
        FILENAME_UNSAFE_RE.replace_all(deal_name, "_")
    )
}

fn recommendation(score: f64) -> &'static str {
    match ScoreBand::from_score(score) {
        ScoreBand::Favorable => "strong",
        ScoreBand::Neutral => "moderate",
        ScoreBand::Unfavorable => "limited",
    }
}

fn evidence_block(evidence: &Evidence) -> String {
    format!(
        "\n### {}\n{}\nTags: {}",
        evidence.title,
        evidence.content,
        evidence.tags.join(", ")
    )
}

/// Renders the memo for `deal`, stamped with `generated_on`.
pub fn investment_memo(deal: &Deal, generated_on: NaiveDate) -> ExportedDocument {
    let founders = deal
        .founders
        .iter()
        .map(|founder| format!("- {founder}"))
        .collect::<Vec<_>>()
        .join("\n");
    let evidence = deal
        .evidence
        .iter()
        .map(evidence_block)
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!(
        "# Investment Memo: {name}

## Executive Summary
{description}

## Key Metrics
- **Revenue**: {revenue}
- **Growth Rate**: {growth}
- **Customers**: {customers}
- **Runway**: {runway} months

## Investment Details
- **Amount**: {amount}
- **Sector**: {sector}
- **Match Score**: {score}/10

## Founders
{founders}

## Evidence Summary
{evidence}

## Recommendation
Based on the diligence conducted, this deal shows {recommendation} potential.

---
Generated on {date}
",
        name = deal.name,
        description = deal.description,
        revenue = deal.metrics.revenue,
        growth = deal.metrics.growth,
        customers = deal.metrics.customers,
        runway = deal.runway,
        amount = deal.amount,
        sector = deal.sector,
        score = deal.score,
        founders = founders,
        evidence = evidence,
        recommendation = recommendation(deal.score),
        date = generated_on.format("%Y-%m-%d"),
    );

    ExportedDocument::markdown(memo_filename(&deal.name), content)
}
