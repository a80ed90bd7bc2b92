//! Property-based tests for the calculator core and history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use educalc::calculator::Calculator;
use educalc::config::Config;
use educalc::core::{
    format_operand, reduce, Action, CalculatorState, NumberLocale, Operation, ERROR_SENTINEL,
};
use educalc::history::{entry_for, HistoryItem, HistoryLog};
use educalc::storage::MemoryStorage;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_operation()(variant in 0..4u8) -> Operation {
        match variant {
            0 => Operation::Add,
            1 => Operation::Subtract,
            2 => Operation::Multiply,
            _ => Operation::Divide,
        }
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => prop::sample::select(vec!['0', '1', '2', '5', '9', '.']).prop_map(Action::AddDigit),
        2 => prop::option::weighted(0.9, arbitrary_operation()).prop_map(Action::ChooseOperation),
        1 => Just(Action::Clear),
        1 => Just(Action::Delete),
        2 => Just(Action::Evaluate),
        1 => Just(Action::Percentage),
        1 => Just(Action::ToggleSign),
    ]
}

fn run(actions: &[Action]) -> CalculatorState {
    actions
        .iter()
        .fold(CalculatorState::initial(), |state, action| reduce(&state, action))
}

proptest! {
    #[test]
    fn current_operand_has_at_most_one_decimal_point(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut state = CalculatorState::initial();
        for action in &actions {
            state = reduce(&state, action);
            prop_assert!(state.current_operand.matches('.').count() <= 1);
        }
    }

    #[test]
    fn reduce_is_pure(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
        next in arbitrary_action()
    ) {
        let state = run(&actions);
        let snapshot = state.clone();

        let first = reduce(&state, &next);
        let second = reduce(&state, &next);

        prop_assert_eq!(state, snapshot);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn clear_always_returns_initial_state(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let state = run(&actions);
        prop_assert_eq!(reduce(&state, &Action::Clear), CalculatorState::initial());
    }

    #[test]
    fn repeated_decimal_points_collapse(count in 1..10usize) {
        let actions = vec![Action::AddDigit('.'); count];
        prop_assert_eq!(run(&actions).current_operand, "0.");
    }

    #[test]
    fn evaluate_always_ends_in_result_mode(
        prev in 0..10_000u32,
        current in 0..10_000u32,
        operation in arbitrary_operation()
    ) {
        let state = CalculatorState {
            current_operand: current.to_string(),
            previous_operand: Some(prev.to_string()),
            operation: Some(operation),
            overwrite: false,
        };
        let next = reduce(&state, &Action::Evaluate);
        prop_assert!(next.overwrite);
        prop_assert!(next.previous_operand.is_none());
        prop_assert!(next.operation.is_none());

        let entry = entry_for(&state, &NumberLocale::pt_br(), Utc::now());
        if next.current_operand == ERROR_SENTINEL {
            prop_assert!(entry.is_none());
        } else {
            prop_assert!(entry.is_some());
        }
    }

    #[test]
    fn format_groups_without_changing_digits(n in 0..1_000_000_000_000u64) {
        let text = n.to_string();
        let formatted = format_operand(Some(&text), &NumberLocale::pt_br());

        prop_assert_eq!(formatted.replace('.', ""), text.clone());
        for group in formatted.split('.').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn format_keeps_fraction_verbatim(int in 0..100_000u32, fraction in "[0-9]{0,8}") {
        let operand = format!("{}.{}", int, fraction);
        let formatted = format_operand(Some(&operand), &NumberLocale::pt_br());
        let expected_suffix = format!(",{}", fraction);
        prop_assert!(formatted.ends_with(&expected_suffix));
    }

    #[test]
    fn history_never_exceeds_limit(count in 0..120usize, limit in 1..60usize) {
        let log = (0..count).fold(HistoryLog::new(limit), |log, n| {
            log.record(HistoryItem::new("1 + 1", n.to_string(), Utc::now()))
        });

        prop_assert_eq!(log.len(), count.min(limit));
        if count > 0 {
            let newest = (count - 1).to_string();
            prop_assert_eq!(log.latest().map(|i| i.result.clone()), Some(newest));
        }
    }

    #[test]
    fn calculator_history_is_bounded(
        actions in prop::collection::vec(arbitrary_action(), 0..200)
    ) {
        let mut calc = Calculator::new(Config::default(), MemoryStorage::new());
        for action in actions {
            calc.dispatch(action);
        }
        prop_assert!(calc.history().len() <= 50);
    }
}

#[test]
fn sixty_evaluations_keep_fifty_most_recent() {
    let mut calc = Calculator::new(Config::default(), MemoryStorage::new());
    for n in 1..=60 {
        calc.dispatch(Action::Clear);
        for digit in n.to_string().chars() {
            calc.dispatch(Action::AddDigit(digit));
        }
        calc.dispatch(Action::ChooseOperation(Some(Operation::Add)));
        calc.dispatch(Action::AddDigit('1'));
        calc.dispatch(Action::Evaluate);
    }

    let history = calc.history();
    assert_eq!(history.len(), 50);
    assert_eq!(history.items()[0].expression, "60 + 1");
    assert_eq!(history.items()[49].expression, "11 + 1");
}
