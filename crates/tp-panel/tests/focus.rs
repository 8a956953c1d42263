//! Tests for the column focus state machine.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use tp_engine::ChronoEngine;
use tp_panel::{
    ColumnFocusController, ColumnValueAdjust, Direction, FocusInputs, PanelAction, SelectSource,
};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn move_left_from_first_column_wraps_to_last() {
    let mut focus = ColumnFocusController::with_focused(0);
    focus.move_column(Direction::Backward, 3);
    assert_eq!(focus.focused(), Some(2));
}

#[test]
fn move_right_from_last_column_wraps_to_first() {
    let mut focus = ColumnFocusController::with_focused(2);
    focus.move_column(Direction::Forward, 3);
    assert_eq!(focus.focused(), Some(0));
}

#[test]
fn column_move_from_none_starts_before_first_column() {
    let mut forward = ColumnFocusController::new();
    forward.move_column(Direction::Forward, 4);
    assert_eq!(forward.focused(), Some(0));

    let mut backward = ColumnFocusController::new();
    backward.move_column(Direction::Backward, 4);
    assert_eq!(backward.focused(), Some(3));
}

#[test]
fn stale_index_heals_after_column_set_shrinks() {
    let mut focus = ColumnFocusController::with_focused(3);
    focus.move_column(Direction::Forward, 2);
    assert_eq!(focus.focused(), Some(0));
}

#[test]
fn settle_wraps_stale_index_before_forwarding() {
    let engine = ChronoEngine::new();
    let mut focus = ColumnFocusController::with_focused(3);
    let mut calls = Vec::new();
    let mut adjuster = |direction: Direction| calls.push(direction);

    focus.dispatch(
        PanelAction::MoveValue(Direction::Forward),
        FocusInputs {
            engine: &engine,
            column_count: 2,
            value: None,
            adjuster: Some(&mut adjuster),
            on_select: &mut |_, _| {},
        },
    );

    assert_eq!(focus.focused(), Some(1));
    assert_eq!(calls, vec![Direction::Forward]);
}

#[test]
fn settle_with_no_columns_clears_focus() {
    let mut focus = ColumnFocusController::with_focused(1);
    focus.settle(0);
    assert_eq!(focus.focused(), None);
}

#[test]
fn no_columns_means_no_focus() {
    let mut focus = ColumnFocusController::with_focused(1);
    focus.move_column(Direction::Forward, 0);
    assert_eq!(focus.focused(), None);
}

#[test]
fn value_move_without_focus_focuses_first_column() {
    let mut focus = ColumnFocusController::new();
    let mut calls = Vec::new();
    let mut adjuster = |direction: Direction| calls.push(direction);

    focus.move_value(Direction::Forward, 3, Some(&mut adjuster));

    assert_eq!(focus.focused(), Some(0));
    assert!(calls.is_empty());
}

#[test]
fn value_move_with_focus_forwards_to_adjuster_once() {
    let mut focus = ColumnFocusController::with_focused(1);
    let mut calls = Vec::new();
    let mut adjuster = |direction: Direction| calls.push(direction);

    focus.move_value(Direction::Backward, 3, Some(&mut adjuster));

    assert_eq!(focus.focused(), Some(1));
    assert_eq!(calls, vec![Direction::Backward]);
}

#[test]
fn value_move_without_adjuster_is_a_no_op() {
    let mut focus = ColumnFocusController::with_focused(1);
    focus.move_value(Direction::Forward, 3, None);
    assert_eq!(focus.focused(), Some(1));
}

#[test]
fn value_move_with_no_columns_keeps_focus_empty() {
    let engine = ChronoEngine::new();
    let mut calls = Vec::new();
    let mut adjuster = |direction: Direction| calls.push(direction);

    let mut unfocused = ColumnFocusController::new();
    unfocused.dispatch(
        PanelAction::MoveValue(Direction::Forward),
        FocusInputs {
            engine: &engine,
            column_count: 0,
            value: None,
            adjuster: Some(&mut adjuster),
            on_select: &mut |_, _| {},
        },
    );
    assert_eq!(unfocused.focused(), None);

    let mut stale = ColumnFocusController::with_focused(2);
    stale.move_value(Direction::Backward, 0, Some(&mut adjuster));
    assert_eq!(stale.focused(), None);

    assert!(calls.is_empty());
}

#[test]
fn commit_sends_current_value_and_clears_focus() {
    let engine = ChronoEngine::new();
    let mut focus = ColumnFocusController::with_focused(2);
    let mut selected = Vec::new();

    focus.commit(&engine, Some(&noon()), &mut |value, source| {
        selected.push((value, source));
    });

    assert_eq!(selected, vec![(noon(), SelectSource::Key)]);
    assert_eq!(focus.focused(), None);
}

#[test]
fn commit_without_value_uses_engine_now() {
    let now = NaiveDate::from_ymd_opt(2001, 2, 3)
        .unwrap()
        .and_hms_opt(4, 5, 6)
        .unwrap();
    let engine = ChronoEngine::with_fixed_now(now);
    let mut focus = ColumnFocusController::new();
    let mut selected = Vec::new();

    focus.commit(&engine, None, &mut |value, source| {
        selected.push((value, source));
    });

    assert_eq!(selected, vec![(now, SelectSource::Key)]);
    assert_eq!(focus.focused(), None);
}

#[test]
fn blur_always_clears_focus() {
    let mut focus = ColumnFocusController::with_focused(1);
    focus.blur();
    assert_eq!(focus.focused(), None);
    focus.blur();
    assert_eq!(focus.focused(), None);
}

struct Recorder {
    steps: Vec<i64>,
}

impl ColumnValueAdjust for Recorder {
    fn on_up_down(&mut self, direction: Direction) {
        self.steps.push(direction.delta());
    }
}

#[test]
fn dispatch_routes_each_action() {
    let engine = ChronoEngine::new();
    let value = noon();
    let mut focus = ColumnFocusController::new();
    let mut recorder = Recorder { steps: vec![] };
    let mut commits = 0;

    let actions = [
        PanelAction::MoveValue(Direction::Forward),
        PanelAction::MoveValue(Direction::Forward),
        PanelAction::MoveColumn(Direction::Forward),
        PanelAction::MoveValue(Direction::Backward),
    ];
    for action in actions {
        focus.dispatch(
            action,
            FocusInputs {
                engine: &engine,
                column_count: 3,
                value: Some(&value),
                adjuster: Some(&mut recorder),
                on_select: &mut |_, _| commits += 1,
            },
        );
    }
    assert_eq!(focus.focused(), Some(1));
    assert_eq!(recorder.steps, vec![1, -1]);

    focus.dispatch(
        PanelAction::Commit,
        FocusInputs {
            engine: &engine,
            column_count: 3,
            value: Some(&value),
            adjuster: None,
            on_select: &mut |_, _| commits += 1,
        },
    );
    assert_eq!(commits, 1);
    assert_eq!(focus.focused(), None);
}

fn action_strategy() -> impl Strategy<Value = PanelAction> {
    let direction = prop_oneof![Just(Direction::Backward), Just(Direction::Forward)];
    prop_oneof![
        direction.clone().prop_map(PanelAction::MoveColumn),
        direction.prop_map(PanelAction::MoveValue),
        Just(PanelAction::Commit),
        Just(PanelAction::Blur),
    ]
}

proptest! {
    #[test]
    fn focus_stays_in_range_for_the_count_at_each_event(
        events in proptest::collection::vec((action_strategy(), 0usize..5), 1..64),
    ) {
        let engine = ChronoEngine::with_fixed_now(noon());
        let mut focus = ColumnFocusController::new();

        for (action, column_count) in events {
            let before = focus.focused();
            let mut adjusted = 0;
            let mut adjuster = |_: Direction| adjusted += 1;
            focus.dispatch(
                action,
                FocusInputs {
                    engine: &engine,
                    column_count,
                    value: None,
                    adjuster: Some(&mut adjuster),
                    on_select: &mut |_, _| {},
                },
            );

            match action {
                _ if column_count == 0 => {
                    prop_assert_eq!(focus.focused(), None);
                    prop_assert_eq!(adjusted, 0);
                }
                PanelAction::MoveColumn(_) => {
                    prop_assert!(focus.focused().is_some_and(|i| i < column_count));
                }
                PanelAction::MoveValue(_) => match before {
                    None => {
                        prop_assert_eq!(focus.focused(), Some(0));
                        prop_assert_eq!(adjusted, 0);
                    }
                    Some(index) => {
                        prop_assert_eq!(focus.focused(), Some(index % column_count));
                        prop_assert_eq!(adjusted, 1);
                    }
                },
                PanelAction::Commit | PanelAction::Blur => {
                    prop_assert_eq!(focus.focused(), None);
                }
            }
            prop_assert!(focus.focused().is_none_or(|i| i < column_count));
        }
    }
}
