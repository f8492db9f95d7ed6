//! Portfolio table: status filter and headline figures.
//!
//! Investment amounts are free text (`$3.2M`). Totals are derived by reading
//! the leading number after stripping `$`, `M` and `,`; text without a
//! leading number contributes zero.

use crate::model::portfolio::{PortfolioCompany, PortfolioStatus};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?\d+(?:\.\d+)?)").expect("valid leading number regex"));
static AMOUNT_NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[$M,]").expect("valid amount noise regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PortfolioFilter {
    #[default]
    All,
    Only(PortfolioStatus),
}

impl PortfolioFilter {
    pub fn parse(value: &str) -> Option<PortfolioFilter> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Only(PortfolioStatus::Active)),
            "at-risk" => Some(Self::Only(PortfolioStatus::AtRisk)),
            "exited" => Some(Self::Only(PortfolioStatus::Exited)),
            _ => None,
        }
    }

    fn matches(self, company: &PortfolioCompany) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => company.status == status,
        }
    }
}

pub fn filter_portfolio(
    portfolio: &[PortfolioCompany],
    filter: PortfolioFilter,
) -> Vec<&PortfolioCompany> {
    portfolio
        .iter()
        .filter(|company| filter.matches(company))
        .collect()
}

/// Headline figures over the whole collection (ignores the active filter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioSummary {
    pub total: usize,
    pub active: usize,
    pub at_risk: usize,
    /// Sum of parsed investment amounts, in millions.
    pub total_investment_m: f64,
}

impl PortfolioSummary {
    pub fn build(portfolio: &[PortfolioCompany]) -> Self {
        let count = |status: PortfolioStatus| {
            portfolio
                .iter()
                .filter(|company| company.status == status)
                .count()
        };
        Self {
            total: portfolio.len(),
            active: count(PortfolioStatus::Active),
            at_risk: count(PortfolioStatus::AtRisk),
            total_investment_m: portfolio
                .iter()
                .map(|company| parse_amount_millions(&company.investment))
                .sum(),
        }
    }
}

/// Reads the leading number of an amount string such as `$3.2M`.
pub fn parse_amount_millions(amount: &str) -> f64 {
    let stripped = AMOUNT_NOISE_RE.replace_all(amount, "");
    LEADING_NUMBER_RE
        .captures(&stripped)
        .and_then(|caps| caps.get(1))
        .and_then(|value| value.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Portfolio companies with runway under the alert threshold.
pub fn runway_alerts(portfolio: &[PortfolioCompany]) -> Vec<&PortfolioCompany> {
    portfolio
        .iter()
        .filter(|company| company.has_runway_alert())
        .collect()
}
