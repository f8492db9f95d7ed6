//! LP report over the whole portfolio.

use crate::export::ExportedDocument;
use crate::model::portfolio::{PortfolioCompany, PortfolioStatus};
use chrono::NaiveDate;

/// `LP_Report_2024-01-20.md`.
pub fn lp_report_filename(date: NaiveDate) -> String {
    format!("LP_Report_{}.md", date.format("%Y-%m-%d"))
}

fn company_block(company: &PortfolioCompany) -> String {
    format!(
        "
### {name}
- **Status**: {status}
- **Investment**: {investment}
- **Valuation**: {valuation}
- **Ownership**: {ownership}
- **ARR**: {arr}
- **Growth**: {growth}
- **Runway**: {runway} months
- **Last Update**: {last_update}
",
        name = company.name,
        status = company.status.as_str(),
        investment = company.investment,
        valuation = company.valuation,
        ownership = company.ownership,
        arr = company.metrics.arr,
        growth = company.metrics.growth,
        runway = company.metrics.runway,
        last_update = company.last_update,
    )
}

/// Renders the report for every company, regardless of any view filter.
pub fn lp_report(portfolio: &[PortfolioCompany], generated_on: NaiveDate) -> ExportedDocument {
    let date = generated_on.format("%Y-%m-%d");
    let count = |status: PortfolioStatus| {
        portfolio
            .iter()
            .filter(|company| company.status == status)
            .count()
    };
    let companies = portfolio
        .iter()
        .map(company_block)
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!(
        "# LP Report - {date}

## Portfolio Overview
Total Companies: {total}
Active Companies: {active}
At Risk: {at_risk}

## Portfolio Companies

{companies}

---
Generated on {date}
",
        total = portfolio.len(),
        active = count(PortfolioStatus::Active),
        at_risk = count(PortfolioStatus::AtRisk),
    );

    ExportedDocument::markdown(lp_report_filename(generated_on), content)
}

#[cfg(test)]
mod tests {
    use super::lp_report;
    use crate::seed;
    use chrono::NaiveDate;

    #[test]
    fn report_counts_and_lists_every_company() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date");
        let report = lp_report(&seed::portfolio(), date);

        assert_eq!(report.filename, "LP_Report_2024-01-20.md");
        assert!(report.content.starts_with("# LP Report - 2024-01-20\n"));
        assert!(report.content.contains("Total Companies: 2\nActive Companies: 1\nAt Risk: 1"));
        assert!(report.content.contains("### DataVault Pro\n- **Status**: active"));
        assert!(report.content.contains("### TechFlow Systems\n- **Status**: at-risk"));
        assert!(report.content.contains("- **Runway**: 8 months"));
    }

    #[test]
    fn empty_portfolio_still_renders_overview() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date");
        let report = lp_report(&[], date);
        assert!(report.content.contains("Total Companies: 0"));
        assert!(report.content.ends_with("Generated on 2024-02-01\n"));
    }
}
