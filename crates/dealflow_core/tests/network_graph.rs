use dealflow_core::seed;
use dealflow_core::views::network::{Edge, Layout, NetworkGraph, NodeKind};
use dealflow_core::Person;

fn person(id: &str, name: &str, connections: &[&str]) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        role: "Partner".to_string(),
        company: "Fund".to_string(),
        connections: connections.iter().map(|c| c.to_string()).collect(),
        deals: Vec::new(),
        last_contact: "2024-01-01".to_string(),
        avatar: None,
    }
}

#[test]
fn edges_come_only_from_people_and_skip_dangling_ids() {
    let people = vec![
        person("p1", "Ada", &["p2", "ghost"]),
        person("p2", "Grace", &[]),
    ];
    let graph = NetworkGraph::build(&people, &seed::deals(), Layout::Seeded(1));

    assert_eq!(graph.edges(), vec![Edge { from: 0, to: 1 }]);
    assert_eq!(graph.connection_names(0), vec!["Grace"]);
    assert!(graph.connection_names(1).is_empty());
    assert!(graph.connection_names(99).is_empty());
}

#[test]
fn adjacency_is_not_mirrored() {
    let people = vec![person("p1", "Ada", &["p2"]), person("p2", "Grace", &[])];
    let graph = NetworkGraph::build(&people, &[], Layout::Random);
    assert_eq!(graph.edges().len(), 1);
}

#[test]
fn colliding_ids_resolve_to_first_node() {
    let graph = NetworkGraph::build(&seed::people(), &seed::deals(), Layout::Seeded(3));

    assert_eq!(graph.nodes()[0].kind, NodeKind::Person);
    assert_eq!(graph.resolve("1"), Some(0));
    assert_eq!(graph.connection_names(0), vec!["Marcus Liu", "MedFlow"]);
}

#[test]
fn different_seeds_place_nodes_differently() {
    let people = seed::people();
    let deals = seed::deals();
    let a = NetworkGraph::build(&people, &deals, Layout::Seeded(1));
    let b = NetworkGraph::build(&people, &deals, Layout::Seeded(2));
    assert_ne!(a, b);
}
