use dealflow_core::store::Store;
use dealflow_core::views::pipeline::{
    advance_stage, move_deal, retreat_stage, MoveDirection, MoveOutcome,
};
use dealflow_core::{Deal, Notification, Stage, StoreError};

#[test]
fn seeded_diligence_deal_advances_to_decided_then_stops() {
    let mut store = Store::seeded();
    assert_eq!(store.deal("1").unwrap().stage, Stage::Diligence);
    assert_eq!(store.deal("1").unwrap().score, 8.5);

    let first = move_deal(&mut store, "1", MoveDirection::Advance).unwrap();
    assert_eq!(first, MoveOutcome::Moved(Stage::IcReady));
    assert_eq!(store.deal("1").unwrap().stage, Stage::IcReady);

    let second = move_deal(&mut store, "1", MoveDirection::Advance).unwrap();
    assert_eq!(second, MoveOutcome::Moved(Stage::Decided));

    let before = store.state().clone();
    let third = move_deal(&mut store, "1", MoveDirection::Advance).unwrap();
    assert_eq!(third, MoveOutcome::AtBoundary(Stage::Decided));
    assert_eq!(store.state(), &before);
}

#[test]
fn boundaries_disable_moves() {
    let fresh = Deal::new("x", "Fresh");
    assert_eq!(fresh.stage, Stage::New);
    assert!(retreat_stage(&fresh).is_none());

    let done = fresh.with_stage(Stage::Decided);
    assert!(advance_stage(&done).is_none());
}

#[test]
fn interior_advance_then_retreat_round_trips() {
    for stage in [Stage::Screening, Stage::Diligence, Stage::IcReady] {
        let deal = Deal::new("x", "Round Trip").with_stage(stage);
        let advanced = advance_stage(&deal).unwrap();
        let back = retreat_stage(&advanced).unwrap();
        assert_eq!(back, deal);
    }
}

#[test]
fn move_changes_only_stage() {
    let mut store = Store::seeded();
    let before = store.deal("2").unwrap().clone();

    move_deal(&mut store, "2", MoveDirection::Retreat).unwrap();

    let after = store.deal("2").unwrap();
    assert_eq!(after.stage, Stage::New);
    assert_eq!(after.with_stage(before.stage), before);
}

#[test]
fn moving_unknown_deal_reports_not_found() {
    let mut store = Store::seeded();
    let err = move_deal(&mut store, "nope", MoveDirection::Advance).unwrap_err();
    assert_eq!(err, StoreError::DealNotFound("nope".to_string()));
}

#[test]
fn moves_notify_and_boundaries_stay_silent() {
    let mut store = Store::seeded();

    move_deal(&mut store, "2", MoveDirection::Retreat).unwrap();
    let at_start = move_deal(&mut store, "2", MoveDirection::Retreat).unwrap();
    assert_eq!(at_start, MoveOutcome::AtBoundary(Stage::New));

    assert_eq!(
        store.state().notifications,
        vec![Notification::StageChanged {
            deal_id: "2".to_string(),
            from: Stage::Screening,
            to: Stage::New,
        }]
    );
}
