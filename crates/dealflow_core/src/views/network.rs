//! Relationship network projection.
//!
//! # Responsibility
//! - Turn people and deals into positioned graph nodes.
//! - Derive edges from person connections only.
//!
//! # Invariants
//! - Placement is uniform-random inside the viewport, not a layout algorithm.
//! - `Layout::Seeded` yields identical coordinates for identical input.
//! - Connection ids resolve against the node list by first match; ids that
//!   resolve to nothing are skipped silently.

use crate::model::deal::Deal;
use crate::model::person::Person;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const VIEWPORT_WIDTH: f64 = 600.0;
pub const VIEWPORT_HEIGHT: f64 = 400.0;
const PLACEMENT_MIN_X: f64 = 100.0;
const PLACEMENT_SPAN_X: f64 = 400.0;
const PLACEMENT_MIN_Y: f64 = 100.0;
const PLACEMENT_SPAN_Y: f64 = 300.0;

const ZOOM_STEP: f64 = 1.2;
const ZOOM_MIN: f64 = 0.3;
const ZOOM_MAX: f64 = 3.0;

/// Node placement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Fresh positions on every build.
    Random,
    /// Reproducible positions for a given seed.
    Seeded(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Person,
    Company,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    /// Empty for company nodes.
    pub connections: Vec<String>,
}

/// Line between two nodes, by index into [`NetworkGraph::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkGraph {
    nodes: Vec<NetworkNode>,
}

impl NetworkGraph {
    /// Builds person nodes followed by company nodes.
    pub fn build(people: &[Person], deals: &[Deal], layout: Layout) -> Self {
        match layout {
            Layout::Random => Self::build_with(people, deals, &mut rand::rng()),
            Layout::Seeded(seed) => {
                Self::build_with(people, deals, &mut StdRng::seed_from_u64(seed))
            }
        }
    }

    fn build_with<R: Rng>(people: &[Person], deals: &[Deal], rng: &mut R) -> Self {
        let mut nodes = Vec::with_capacity(people.len() + deals.len());
        for person in people {
            let (x, y) = place(rng);
            nodes.push(NetworkNode {
                id: person.id.clone(),
                name: person.name.clone(),
                kind: NodeKind::Person,
                x,
                y,
                connections: person.connections.clone(),
            });
        }
        for deal in deals {
            let (x, y) = place(rng);
            nodes.push(NetworkNode {
                id: deal.id.clone(),
                name: deal.name.clone(),
                kind: NodeKind::Company,
                x,
                y,
                connections: Vec::new(),
            });
        }
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    /// First node carrying `id`. Person and deal ids may collide; people win.
    pub fn resolve(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// One edge per resolvable connection, in node then connection order.
    pub fn edges(&self) -> Vec<Edge> {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(from, node)| {
                node.connections
                    .iter()
                    .filter_map(move |target| self.resolve(target).map(|to| Edge { from, to }))
            })
            .collect()
    }

    /// Names of the node's resolvable connections, in declared order.
    pub fn connection_names(&self, node_index: usize) -> Vec<&str> {
        let Some(node) = self.nodes.get(node_index) else {
            return Vec::new();
        };
        node.connections
            .iter()
            .filter_map(|target| self.resolve(target))
            .map(|index| self.nodes[index].name.as_str())
            .collect()
    }
}

/// Sidebar counters taken from the source collections, not the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkStats {
    pub people: usize,
    pub companies: usize,
    /// Declared person connections, resolvable or not; not deduplicated
    /// across mirrored pairs.
    pub connections: usize,
}

impl NetworkStats {
    pub fn build(people: &[Person], deals: &[Deal]) -> Self {
        Self {
            people: people.len(),
            companies: deals.len(),
            connections: people.iter().map(|person| person.connections.len()).sum(),
        }
    }
}

fn place<R: Rng>(rng: &mut R) -> (f64, f64) {
    let x = PLACEMENT_MIN_X + rng.random::<f64>() * PLACEMENT_SPAN_X;
    let y = PLACEMENT_MIN_Y + rng.random::<f64>() * PLACEMENT_SPAN_Y;
    (x, y)
}

/// Graph zoom factor clamped to `[0.3, 3.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f64);

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Zoom {
    pub fn factor(self) -> f64 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        Self((self.0 * ZOOM_STEP).min(ZOOM_MAX))
    }

    pub fn zoom_out(self) -> Self {
        Self((self.0 / ZOOM_STEP).max(ZOOM_MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Layout, NetworkGraph, NetworkStats, NodeKind, Zoom, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
    };
    use crate::seed;

    #[test]
    fn seeded_layout_is_reproducible_and_inside_viewport() {
        let people = seed::people();
        let deals = seed::deals();
        let first = NetworkGraph::build(&people, &deals, Layout::Seeded(7));
        let second = NetworkGraph::build(&people, &deals, Layout::Seeded(7));
        assert_eq!(first, second);
        for node in first.nodes() {
            assert!(node.x >= 100.0 && node.x < 500.0 && node.x < VIEWPORT_WIDTH);
            assert!(node.y >= 100.0 && node.y < 400.0 && node.y <= VIEWPORT_HEIGHT);
        }
    }

    #[test]
    fn companies_carry_no_connections() {
        let graph = NetworkGraph::build(&seed::people(), &seed::deals(), Layout::Random);
        assert_eq!(graph.nodes().len(), 5);
        assert!(graph
            .nodes()
            .iter()
            .filter(|node| node.kind == NodeKind::Company)
            .all(|node| node.connections.is_empty()));
    }

    #[test]
    fn stats_count_declared_connections() {
        let stats = NetworkStats::build(&seed::people(), &seed::deals());
        assert_eq!(
            stats,
            NetworkStats {
                people: 2,
                companies: 3,
                connections: 3,
            }
        );
    }

    #[test]
    fn zoom_is_clamped() {
        let mut zoom = Zoom::default();
        for _ in 0..20 {
            zoom = zoom.zoom_in();
        }
        assert_eq!(zoom.factor(), 3.0);
        for _ in 0..40 {
            zoom = zoom.zoom_out();
        }
        assert_eq!(zoom.factor(), 0.3);
    }
}
