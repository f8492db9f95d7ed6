//! Static seed collections loaded at session start.
//!
//! # Invariants
//! - Ids are unique within each collection.
//! - Every call returns a fresh owned copy; nothing is shared between stores.

use crate::model::deal::{Deal, DealMetrics, DealStatus, Evidence, EvidenceType, Stage};
use crate::model::person::Person;
use crate::model::portfolio::{PortfolioCompany, PortfolioMetrics, PortfolioStatus};
use crate::model::task::{Task, TaskPriority, TaskType};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

pub fn deals() -> Vec<Deal> {
    vec![
        Deal {
            id: "1".to_string(),
            name: "CloudSync AI".to_string(),
            stage: Stage::Diligence,
            score: 8.5,
            sector: "AI/ML".to_string(),
            amount: "$2.5M Series A".to_string(),
            runway: 18,
            last_update: "2 hours ago".to_string(),
            status: DealStatus::Active,
            description: "AI-powered data synchronization platform for enterprise".to_string(),
            founders: strings(&["Sarah Chen", "Marcus Liu"]),
            metrics: DealMetrics {
                revenue: "$500K ARR".to_string(),
                growth: "15% MoM".to_string(),
                customers: "45 enterprise".to_string(),
            },
            evidence: vec![Evidence {
                id: "1".to_string(),
                kind: EvidenceType::Note,
                title: "Founder Interview Notes".to_string(),
                content: "Strong technical background, clear product vision".to_string(),
                url: None,
                tags: strings(&["founder", "interview"]),
                created_at: "2024-01-15".to_string(),
            }],
        },
        Deal {
            id: "2".to_string(),
            name: "EcoShip Logistics".to_string(),
            stage: Stage::Screening,
            score: 7.2,
            sector: "Climate Tech".to_string(),
            amount: "$1.8M Seed".to_string(),
            runway: 12,
            last_update: "1 day ago".to_string(),
            status: DealStatus::Active,
            description: "Carbon-neutral shipping optimization platform".to_string(),
            founders: strings(&["David Park", "Emma Thompson"]),
            metrics: DealMetrics {
                revenue: "$120K ARR".to_string(),
                growth: "8% MoM".to_string(),
                customers: "12 SMB".to_string(),
            },
            evidence: Vec::new(),
        },
        Deal {
            id: "3".to_string(),
            name: "MedFlow".to_string(),
            stage: Stage::IcReady,
            score: 9.1,
            sector: "HealthTech".to_string(),
            amount: "$4.2M Series A".to_string(),
            runway: 24,
            last_update: "3 hours ago".to_string(),
            status: DealStatus::Active,
            description: "Hospital workflow automation and patient management".to_string(),
            founders: strings(&["Dr. Ana Rodriguez", "James Miller"]),
            metrics: DealMetrics {
                revenue: "$1.2M ARR".to_string(),
                growth: "22% MoM".to_string(),
                customers: "8 hospitals".to_string(),
            },
            evidence: Vec::new(),
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Review CloudSync AI technical diligence".to_string(),
            priority: TaskPriority::High,
            kind: TaskType::Review,
            deal_id: Some("1".to_string()),
            due_date: "2024-01-16".to_string(),
            completed: false,
            assignee: "You".to_string(),
        },
        Task {
            id: "2".to_string(),
            title: "Schedule call with MedFlow founders".to_string(),
            priority: TaskPriority::High,
            kind: TaskType::Call,
            deal_id: Some("3".to_string()),
            due_date: "2024-01-16".to_string(),
            completed: false,
            assignee: "Sarah Kim".to_string(),
        },
        Task {
            id: "3".to_string(),
            title: "Research EcoShip competitive landscape".to_string(),
            priority: TaskPriority::Medium,
            kind: TaskType::Research,
            deal_id: Some("2".to_string()),
            due_date: "2024-01-17".to_string(),
            completed: false,
            assignee: "Mike Chen".to_string(),
        },
    ]
}

pub fn people() -> Vec<Person> {
    vec![
        Person {
            id: "1".to_string(),
            name: "Sarah Chen".to_string(),
            role: "CEO".to_string(),
            company: "CloudSync AI".to_string(),
            // No person "3"; in the network view this id lands on deal "3".
            connections: strings(&["2", "3"]),
            deals: strings(&["1"]),
            last_contact: "2024-01-15".to_string(),
            avatar: None,
        },
        Person {
            id: "2".to_string(),
            name: "Marcus Liu".to_string(),
            role: "CTO".to_string(),
            company: "CloudSync AI".to_string(),
            connections: strings(&["1"]),
            deals: strings(&["1"]),
            last_contact: "2024-01-15".to_string(),
            avatar: None,
        },
    ]
}

pub fn portfolio() -> Vec<PortfolioCompany> {
    vec![
        PortfolioCompany {
            id: "1".to_string(),
            name: "DataVault Pro".to_string(),
            status: PortfolioStatus::Active,
            investment: "$3.2M".to_string(),
            valuation: "$45M".to_string(),
            ownership: "12%".to_string(),
            last_update: "1 week ago".to_string(),
            metrics: PortfolioMetrics {
                arr: "$2.8M".to_string(),
                growth: "18%".to_string(),
                runway: 30,
            },
        },
        PortfolioCompany {
            id: "2".to_string(),
            name: "TechFlow Systems".to_string(),
            status: PortfolioStatus::AtRisk,
            investment: "$2.1M".to_string(),
            valuation: "$28M".to_string(),
            ownership: "15%".to_string(),
            last_update: "3 days ago".to_string(),
            metrics: PortfolioMetrics {
                arr: "$890K".to_string(),
                growth: "3%".to_string(),
                runway: 8,
            },
        },
    ]
}
