use dealflow_core::{seed, AppState, Notification, Stage, Task, TaskPriority, TaskType};

#[test]
fn deal_serializes_with_dashboard_field_names() {
    let deal = seed::deals().remove(2);
    let json = serde_json::to_value(&deal).unwrap();

    assert_eq!(json["stage"], "ic-ready");
    assert_eq!(json["status"], "active");
    assert_eq!(json["lastUpdate"], "3 hours ago");
    assert_eq!(json["metrics"]["revenue"], "$1.2M ARR");
    assert_eq!(json["score"], 9.1);

    let decoded: dealflow_core::Deal = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, deal);
}

#[test]
fn evidence_and_task_use_type_field() {
    let deal = seed::deals().remove(0);
    let evidence = serde_json::to_value(&deal.evidence[0]).unwrap();
    assert_eq!(evidence["type"], "note");
    assert_eq!(evidence["createdAt"], "2024-01-15");
    assert!(evidence.get("url").is_none());

    let mut task = Task::with_id("t", "Ping founders", TaskPriority::Medium, TaskType::FollowUp);
    task.deal_id = Some("1".to_string());
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["type"], "follow-up");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["dealId"], "1");
    assert_eq!(json["dueDate"], "");
}

#[test]
fn task_without_deal_id_deserializes() {
    let value = serde_json::json!({
        "id": "9",
        "title": "Read deck",
        "priority": "low",
        "type": "review",
        "dueDate": "2024-02-01",
        "completed": false,
        "assignee": "You"
    });
    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.deal_id, None);
    assert_eq!(task.kind, TaskType::Review);
}

#[test]
fn notifications_are_typed_and_ordered() {
    let mut store = dealflow_core::Store::seeded();
    store.push_notification(Notification::TaskCompleted {
        task_id: "1".to_string(),
    });
    store.push_notification(Notification::StageChanged {
        deal_id: "1".to_string(),
        from: Stage::Diligence,
        to: Stage::IcReady,
    });

    let state: &AppState = store.state();
    assert_eq!(state.notifications.len(), 2);
    let json = serde_json::to_value(&state.notifications[1]).unwrap();
    assert_eq!(json["kind"], "stage_changed");
    assert_eq!(json["to"], "ic-ready");
}
