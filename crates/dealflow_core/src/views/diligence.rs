//! Diligence workspace for one deal.
//!
//! # Responsibility
//! - Resolve which deal the workspace shows.
//! - Collect evidence form input into a typed draft.
//!
//! # Invariants
//! - Submitted evidence is built and returned but never written to the store;
//!   the deal's evidence list stays as seeded. Callers that want it persisted
//!   must issue their own `UpdateDeal`.

use crate::model::deal::{Deal, Evidence, EvidenceType};
use crate::model::{new_entity_id, EvidenceId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Picks the deal for the workspace.
///
/// - `Some(id)`: that deal, or `None` if unknown.
/// - `None`: the first deal in the collection, or `None` when it is empty.
pub fn resolve_deal<'a>(deals: &'a [Deal], deal_id: Option<&str>) -> Option<&'a Deal> {
    match deal_id {
        Some(id) => deals.iter().find(|deal| deal.id == id),
        None => deals.first(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiligenceTab {
    #[default]
    Overview,
    Metrics,
    Docs,
    Notes,
    Activity,
}

impl DiligenceTab {
    pub const ALL: [DiligenceTab; 5] = [
        DiligenceTab::Overview,
        DiligenceTab::Metrics,
        DiligenceTab::Docs,
        DiligenceTab::Notes,
        DiligenceTab::Activity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Metrics => "Metrics",
            Self::Docs => "Documents",
            Self::Notes => "Notes",
            Self::Activity => "Activity",
        }
    }

    /// Only the overview tab renders real content; the rest are placeholders.
    pub fn has_content(self) -> bool {
        matches!(self, Self::Overview)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceDraftError {
    EmptyTitle,
}

impl Display for EvidenceDraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "evidence title cannot be empty"),
        }
    }
}

impl Error for EvidenceDraftError {}

/// Raw evidence form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceDraft {
    pub kind: EvidenceType,
    pub title: String,
    pub content: String,
    pub url: String,
    /// Comma-separated tag input.
    pub tags: String,
}

impl Default for EvidenceDraft {
    fn default() -> Self {
        Self {
            kind: EvidenceType::Note,
            title: String::new(),
            content: String::new(),
            url: String::new(),
            tags: String::new(),
        }
    }
}

impl EvidenceDraft {
    /// Splits tag input on commas, trimming and dropping blanks.
    ///
    /// Order is preserved and duplicates are kept.
    pub fn parsed_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Builds an evidence record from this draft.
    ///
    /// A blank `url` becomes `None`; a non-blank one is kept for any kind.
    pub fn into_evidence(
        self,
        id: impl Into<EvidenceId>,
        created_at: impl Into<String>,
    ) -> Result<Evidence, EvidenceDraftError> {
        if self.title.trim().is_empty() {
            return Err(EvidenceDraftError::EmptyTitle);
        }
        let tags = self.parsed_tags();
        let url = Some(self.url.trim().to_string()).filter(|url| !url.is_empty());
        Ok(Evidence {
            id: id.into(),
            kind: self.kind,
            title: self.title,
            content: self.content,
            url,
            tags,
            created_at: created_at.into(),
        })
    }
}

/// Handles the evidence form submit for `deal`.
///
/// Returns the evidence that would be attached. The deal and the store are
/// left untouched.
pub fn submit_evidence(
    deal: &Deal,
    draft: EvidenceDraft,
    created_at: impl Into<String>,
) -> Result<Evidence, EvidenceDraftError> {
    let evidence = draft.into_evidence(new_entity_id(), created_at)?;
    info!(
        "event=evidence_submit module=diligence deal_id={} kind={} tags={} status=not_persisted",
        deal.id,
        evidence.kind.as_str(),
        evidence.tags.len()
    );
    Ok(evidence)
}

#[cfg(test)]
mod tests {
    use super::{resolve_deal, submit_evidence, DiligenceTab, EvidenceDraft, EvidenceDraftError};
    use crate::model::deal::EvidenceType;
    use crate::seed;
    use crate::store::Store;

    #[test]
    fn resolve_defaults_to_first_deal() {
        let deals = seed::deals();
        assert_eq!(resolve_deal(&deals, None).map(|d| d.id.as_str()), Some("1"));
        assert_eq!(resolve_deal(&deals, Some("3")).map(|d| d.id.as_str()), Some("3"));
        assert!(resolve_deal(&deals, Some("404")).is_none());
        assert!(resolve_deal(&[], None).is_none());
    }

    #[test]
    fn only_overview_has_content() {
        let with_content: Vec<DiligenceTab> = DiligenceTab::ALL
            .into_iter()
            .filter(|tab| tab.has_content())
            .collect();
        assert_eq!(with_content, vec![DiligenceTab::Overview]);
    }

    #[test]
    fn draft_tags_keep_order_and_duplicates() {
        let draft = EvidenceDraft {
            tags: " market, ,team,market ".to_string(),
            ..EvidenceDraft::default()
        };
        assert_eq!(draft.parsed_tags(), vec!["market", "team", "market"]);
    }

    #[test]
    fn draft_without_title_is_rejected() {
        let err = EvidenceDraft::default()
            .into_evidence("e1", "2024-01-20")
            .expect_err("blank title must fail");
        assert_eq!(err, EvidenceDraftError::EmptyTitle);
    }

    #[test]
    fn url_is_kept_regardless_of_kind() {
        let evidence = EvidenceDraft {
            kind: EvidenceType::Note,
            title: "Call recap".to_string(),
            url: "https://example.com/recap".to_string(),
            ..EvidenceDraft::default()
        }
        .into_evidence("e1", "2024-01-20")
        .expect("valid draft");
        assert_eq!(evidence.url.as_deref(), Some("https://example.com/recap"));
        assert!(evidence.tags.is_empty());
    }

    #[test]
    fn submit_returns_evidence_without_touching_the_store() {
        let store = Store::seeded();
        let before = store.deal("1").cloned().expect("seed deal 1");
        let draft = EvidenceDraft {
            kind: EvidenceType::Link,
            title: "Customer reference".to_string(),
            url: " https://example.com/ref ".to_string(),
            tags: "customers, sales".to_string(),
            ..EvidenceDraft::default()
        };

        let evidence = submit_evidence(&before, draft, "2024-01-21").expect("valid draft");
        assert_eq!(evidence.title, "Customer reference");
        assert_eq!(evidence.url.as_deref(), Some("https://example.com/ref"));
        assert_eq!(evidence.tags, vec!["customers", "sales"]);
        assert_eq!(evidence.created_at, "2024-01-21");
        assert!(!evidence.id.is_empty());

        let after = store.deal("1").expect("seed deal 1");
        assert_eq!(after, &before);
        assert_eq!(after.evidence.len(), 1);
        assert!(after.evidence.iter().all(|item| item.id != evidence.id));
    }

    #[test]
    fn submit_rejects_blank_title() {
        let deal = seed::deals().remove(0);
        let err = submit_evidence(&deal, EvidenceDraft::default(), "2024-01-21")
            .expect_err("blank title must fail");
        assert_eq!(err, EvidenceDraftError::EmptyTitle);
    }
}
