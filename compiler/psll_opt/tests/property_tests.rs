//! Property-based tests for the optimizer.
//!
//! Random small programs of leaves and shallow ternaries, checking that:
//! 1. Neither search ever makes a program longer
//! 2. Reported lengths match a fresh compilation of the result
//! 3. Parallel considerate search picks exactly what the sequential one does

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use psll_build::compile;
use psll_ir::{Node, Program};
use psll_opt::{Optimizer, SearchLimits};

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9+*!]{0,6}").expect("valid regex")
}

fn slot_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        1 => Just(Node::Absent),
        3 => text_strategy().prop_map(Node::leaf),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        text_strategy().prop_map(Node::leaf),
        (text_strategy(), slot_strategy(), slot_strategy())
            .prop_map(|(root, left, right)| Node::ternary(root, left, right)),
    ]
}

fn program_strategy() -> impl Strategy<Value = Program> {
    prop::collection::vec(node_strategy(), 1..4).prop_map(Program::new)
}

fn compiled_len(program: &Program) -> usize {
    compile(program).unwrap().chars().count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_greedy_is_monotone(program in program_strategy()) {
        let limits = SearchLimits::new(8, 3).unwrap();
        let result = Optimizer::new(limits).greedy(program.clone()).unwrap();
        prop_assert_eq!(result.initial_len, compiled_len(&program));
        prop_assert!(result.final_len <= result.initial_len);
        prop_assert_eq!(result.final_len, compiled_len(&result.program));
    }

    #[test]
    fn prop_considerate_is_monotone(program in program_strategy()) {
        let limits = SearchLimits::new(4, 3).unwrap();
        let result = Optimizer::new(limits).considerate(program).unwrap();
        prop_assert!(result.final_len <= result.initial_len);
        prop_assert_eq!(result.final_len, compiled_len(&result.program));
    }

    #[test]
    fn prop_parallel_matches_sequential(program in program_strategy()) {
        let limits = SearchLimits::new(3, 3).unwrap();
        let sequential = Optimizer::new(limits).considerate(program.clone()).unwrap();
        let parallel = Optimizer::new(limits).considerate_parallel(program).unwrap();
        prop_assert_eq!(parallel, sequential);
    }
}
