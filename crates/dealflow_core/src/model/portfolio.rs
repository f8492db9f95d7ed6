//! Funded portfolio companies, tracked independently of the deal pipeline.

use super::{PortfolioId, RUNWAY_ALERT_MONTHS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortfolioStatus {
    Active,
    AtRisk,
    Exited,
}

impl PortfolioStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::AtRisk => "at-risk",
            Self::Exited => "exited",
        }
    }
}

/// Post-close traction figures. Unlike deals, `runway` is numeric here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub arr: String,
    pub growth: String,
    pub runway: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCompany {
    pub id: PortfolioId,
    pub name: String,
    pub status: PortfolioStatus,
    pub investment: String,
    pub valuation: String,
    pub ownership: String,
    pub last_update: String,
    pub metrics: PortfolioMetrics,
}

impl PortfolioCompany {
    pub fn has_runway_alert(&self) -> bool {
        self.metrics.runway < RUNWAY_ALERT_MONTHS
    }
}
