//! Pipeline kanban: stage columns and one-step stage moves.
//!
//! # Invariants
//! - Columns always appear in `Stage::ALL` order, including empty ones.
//! - A move copies the whole deal and changes only `stage`.
//! - Retreat is disabled at `new`, advance at `decided`; the store itself does
//!   not guard stage writes.

use crate::model::deal::{Deal, Stage};
use crate::model::notification::Notification;
use crate::store::{Store, StoreError, StoreResult};
use crate::views::matches_search;
use log::info;

/// Sector dropdown selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SectorFilter {
    #[default]
    All,
    Only(String),
}

impl SectorFilter {
    /// Parses dropdown input; `all` (any case) or blank means no filter.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    fn matches(&self, sector: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == sector,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineFilter {
    pub search: String,
    pub sector: SectorFilter,
}

impl PipelineFilter {
    pub fn matches(&self, deal: &Deal) -> bool {
        matches_search(&deal.name, &self.search) && self.sector.matches(&deal.sector)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineColumn<'a> {
    pub stage: Stage,
    pub deals: Vec<&'a Deal>,
}

/// Groups matching deals into the five stage columns.
pub fn pipeline_columns<'a>(deals: &'a [Deal], filter: &PipelineFilter) -> Vec<PipelineColumn<'a>> {
    Stage::ALL
        .into_iter()
        .map(|stage| PipelineColumn {
            stage,
            deals: deals
                .iter()
                .filter(|deal| deal.stage == stage && filter.matches(deal))
                .collect(),
        })
        .collect()
}

/// Distinct sectors in first-seen order.
pub fn sectors(deals: &[Deal]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for deal in deals {
        if !seen.contains(&deal.sector.as_str()) {
            seen.push(deal.sector.as_str());
        }
    }
    seen
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Advance,
    Retreat,
}

/// Result of a stage move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Deal now sits in this stage.
    Moved(Stage),
    /// Already at the first/last stage; nothing dispatched.
    AtBoundary(Stage),
}

/// Copy of `deal` one stage to the right, or `None` at `decided`.
pub fn advance_stage(deal: &Deal) -> Option<Deal> {
    deal.stage.next().map(|stage| deal.with_stage(stage))
}

/// Copy of `deal` one stage to the left, or `None` at `new`.
pub fn retreat_stage(deal: &Deal) -> Option<Deal> {
    deal.stage.previous().map(|stage| deal.with_stage(stage))
}

/// Moves one deal a single stage and writes it back through `UpdateDeal`.
///
/// A successful move appends `Notification::StageChanged`.
///
/// # Errors
/// - `StoreError::DealNotFound` when `deal_id` is not in the collection.
pub fn move_deal(
    store: &mut Store,
    deal_id: &str,
    direction: MoveDirection,
) -> StoreResult<MoveOutcome> {
    let deal = store
        .deal(deal_id)
        .ok_or_else(|| StoreError::DealNotFound(deal_id.to_string()))?;
    let from = deal.stage;
    let moved = match direction {
        MoveDirection::Advance => advance_stage(deal),
        MoveDirection::Retreat => retreat_stage(deal),
    };
    let Some(moved) = moved else {
        return Ok(MoveOutcome::AtBoundary(from));
    };

    let to = moved.stage;
    store.update_deal(moved)?;
    store.push_notification(Notification::StageChanged {
        deal_id: deal_id.to_string(),
        from,
        to,
    });
    info!(
        "event=stage_move module=pipeline deal_id={} from={} to={}",
        deal_id, from, to
    );
    Ok(MoveOutcome::Moved(to))
}

#[cfg(test)]
mod tests {
    use super::{pipeline_columns, sectors, PipelineFilter, SectorFilter};
    use crate::model::deal::Stage;
    use crate::seed;

    #[test]
    fn columns_follow_stage_order_and_keep_empty_stages() {
        let deals = seed::deals();
        let columns = pipeline_columns(&deals, &PipelineFilter::default());
        let stages: Vec<Stage> = columns.iter().map(|column| column.stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
        assert!(columns[0].deals.is_empty());
        assert_eq!(columns[2].deals[0].id, "1");
    }

    #[test]
    fn search_is_case_insensitive_and_sector_is_exact() {
        let deals = seed::deals();
        let filter = PipelineFilter {
            search: "CLOUD".to_string(),
            sector: SectorFilter::All,
        };
        let hits: usize = pipeline_columns(&deals, &filter)
            .iter()
            .map(|column| column.deals.len())
            .sum();
        assert_eq!(hits, 1);

        let filter = PipelineFilter {
            search: String::new(),
            sector: SectorFilter::parse("healthtech"),
        };
        let hits: usize = pipeline_columns(&deals, &filter)
            .iter()
            .map(|column| column.deals.len())
            .sum();
        assert_eq!(hits, 0);
    }

    #[test]
    fn sectors_are_distinct_in_first_seen_order() {
        let mut deals = seed::deals();
        deals.push(deals[0].clone());
        assert_eq!(sectors(&deals), vec!["AI/ML", "Climate Tech", "HealthTech"]);
    }
}
