//! Deal and evidence records.
//!
//! # Responsibility
//! - Describe a prospective investment and its diligence citations.
//! - Provide the fixed pipeline stage order used for column placement.
//!
//! # Invariants
//! - `Stage` has a total order `new < screening < diligence < ic-ready < decided`.
//! - `status` and `stage` are independent axes; no consistency rule applies.
//! - `score` is not bounded; out-of-range values are kept as given.

use super::{DealId, EvidenceId, RUNWAY_ALERT_MONTHS};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Pipeline position of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    New,
    Screening,
    Diligence,
    IcReady,
    Decided,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 5] = [
        Stage::New,
        Stage::Screening,
        Stage::Diligence,
        Stage::IcReady,
        Stage::Decided,
    ];

    /// Zero-based column index.
    pub fn index(self) -> usize {
        match self {
            Self::New => 0,
            Self::Screening => 1,
            Self::Diligence => 2,
            Self::IcReady => 3,
            Self::Decided => 4,
        }
    }

    /// Next stage, or `None` at `decided`.
    pub fn next(self) -> Option<Stage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Previous stage, or `None` at `new`.
    pub fn previous(self) -> Option<Stage> {
        self.index().checked_sub(1).map(|index| Self::ALL[index])
    }

    /// Wire name, e.g. `ic-ready`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Screening => "screening",
            Self::Diligence => "diligence",
            Self::IcReady => "ic-ready",
            Self::Decided => "decided",
        }
    }

    /// Column heading shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Screening => "Screening",
            Self::Diligence => "Diligence",
            Self::IcReady => "IC Ready",
            Self::Decided => "Decided",
        }
    }

    pub fn parse(value: &str) -> Option<Stage> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == value.trim())
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse deal health, independent of [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealStatus {
    Active,
    AtRisk,
    Decided,
}

impl DealStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::AtRisk => "at-risk",
            Self::Decided => "decided",
        }
    }
}

/// Color band derived from a deal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Score >= 8.
    Favorable,
    /// Score >= 6.
    Neutral,
    Unfavorable,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Favorable
        } else if score >= 6.0 {
            Self::Neutral
        } else {
            Self::Unfavorable
        }
    }
}

/// Free-text traction figures as entered by the team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealMetrics {
    pub revenue: String,
    pub growth: String,
    pub customers: String,
}

/// Evidence category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    Link,
    Note,
    Document,
}

impl EvidenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Note => "note",
            Self::Document => "document",
        }
    }

    pub fn parse(value: &str) -> Option<EvidenceType> {
        match value.trim().to_ascii_lowercase().as_str() {
            "link" => Some(Self::Link),
            "note" => Some(Self::Note),
            "document" => Some(Self::Document),
            _ => None,
        }
    }
}

/// Citation attached to one deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub id: EvidenceId,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: EvidenceType,
    pub title: String,
    pub content: String,
    /// Meaningful for `EvidenceType::Link`; not checked against `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Order preserved, duplicates kept.
    pub tags: Vec<String>,
    pub created_at: String,
}

/// Prospective investment tracked through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub name: String,
    pub stage: Stage,
    /// Nominally 0-10.
    pub score: f64,
    pub sector: String,
    pub amount: String,
    /// Estimated months of cash runway.
    pub runway: i64,
    pub last_update: String,
    pub status: DealStatus,
    pub description: String,
    pub founders: Vec<String>,
    pub metrics: DealMetrics,
    pub evidence: Vec<Evidence>,
}

impl Deal {
    /// Creates a deal in `new` stage with empty descriptive fields.
    pub fn new(id: impl Into<DealId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stage: Stage::New,
            score: 0.0,
            sector: String::new(),
            amount: String::new(),
            runway: 0,
            last_update: String::new(),
            status: DealStatus::Active,
            description: String::new(),
            founders: Vec::new(),
            metrics: DealMetrics::default(),
            evidence: Vec::new(),
        }
    }

    /// Returns a full copy with only `stage` replaced.
    pub fn with_stage(&self, stage: Stage) -> Self {
        Self {
            stage,
            ..self.clone()
        }
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Whether runway is short enough to raise an alert.
    pub fn has_runway_alert(&self) -> bool {
        self.runway < RUNWAY_ALERT_MONTHS
    }
}
