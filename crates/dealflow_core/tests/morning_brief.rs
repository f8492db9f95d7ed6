use dealflow_core::views::home::{priority_tasks, runway_alerts};
use dealflow_core::{Deal, Task, TaskPriority, TaskType};

fn task(id: &str, priority: TaskPriority) -> Task {
    Task::with_id(id, format!("task {id}"), priority, TaskType::Research)
}

#[test]
fn top_three_orders_by_priority_and_keeps_ties_stable() {
    let tasks = vec![
        task("a", TaskPriority::Low),
        task("b", TaskPriority::High),
        task("c", TaskPriority::Medium),
        task("d", TaskPriority::High),
    ];

    let top: Vec<&str> = priority_tasks(&tasks, 3)
        .iter()
        .map(|task| task.id.as_str())
        .collect();

    assert_eq!(top, vec!["b", "d", "c"]);
}

#[test]
fn runway_alert_boundary_is_strict() {
    let mut short = Deal::new("s", "Short Runway");
    short.runway = 11;
    let mut exact = Deal::new("e", "Exactly Twelve");
    exact.runway = 12;
    let deals = vec![short, exact];

    let alerts: Vec<&str> = runway_alerts(&deals)
        .iter()
        .map(|deal| deal.id.as_str())
        .collect();

    assert_eq!(alerts, vec!["s"]);
}
