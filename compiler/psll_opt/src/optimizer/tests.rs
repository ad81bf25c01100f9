use super::*;
use psll_build::compile;
use psll_ir::Node;
use pretty_assertions::assert_eq;

fn t(root: &str, left: Node, right: Node) -> Node {
    Node::ternary(root, left, right)
}

fn leaf(text: &str) -> Node {
    Node::leaf(text)
}

/// A few statements of varied width and depth.
fn sample() -> Program {
    Program::new(vec![
        t("set", leaf("a"), leaf("12345")),
        t("out", leaf("a"), Node::Absent),
        leaf("x"),
        t("loop", t("!", leaf("a"), Node::Absent), t("set", leaf("a"), leaf("0"))),
    ])
}

fn limits(max_iter: usize, max_depth: usize) -> SearchLimits {
    SearchLimits::new(max_iter, max_depth).unwrap()
}

fn compiled_len(program: &Program) -> usize {
    compile(program).unwrap().chars().count()
}

#[test]
fn zero_iterations_rejected() {
    assert_eq!(SearchLimits::new(0, 10), Err(OptimizeError::ZeroIterations));
}

#[test]
fn strategy_names() {
    for strategy in [Strategy::None, Strategy::Greedy, Strategy::Considerate] {
        assert_eq!(Strategy::from_name(strategy.as_str()), Some(strategy));
    }
    assert_eq!(Strategy::from_name("fast"), None);
}

#[test]
fn none_keeps_the_program() {
    let options = OptimizeOptions::new(Strategy::None, limits(10, 3));
    let result = crate::optimize(sample(), &options).unwrap();
    assert_eq!(result.program, sample());
    assert_eq!(result.rounds, 0);
    assert_eq!(result.initial_len, compiled_len(&sample()));
    assert_eq!(result.final_len, result.initial_len);
}

#[test]
fn greedy_never_grows() {
    let result = Optimizer::new(limits(50, 3)).greedy(sample()).unwrap();
    assert_eq!(result.initial_len, compiled_len(&sample()));
    assert!(result.final_len <= result.initial_len);
    assert_eq!(result.final_len, compiled_len(&result.program));
    assert_eq!(result.rounds == 0, result.program == sample());
}

#[test]
fn greedy_takes_first_improvement() {
    let program = sample();
    let initial = compiled_len(&program);
    let first = greedy_candidates(&program).find(|c| compiled_len(c) < initial);

    let result = Optimizer::new(limits(1, 3)).greedy(program.clone()).unwrap();
    match first {
        Some(candidate) => {
            assert_eq!(result.rounds, 1);
            assert_eq!(result.program, candidate);
        }
        None => {
            assert_eq!(result.rounds, 0);
            assert_eq!(result.program, program);
        }
    }
}

#[test]
fn considerate_never_grows() {
    let result = Optimizer::new(limits(20, 4)).considerate(sample()).unwrap();
    assert!(result.final_len <= result.initial_len);
    assert_eq!(result.final_len, compiled_len(&result.program));
    assert!(result.rounds <= 20);
}

#[test]
fn considerate_round_beats_greedy_round() {
    let program = sample();
    let initial = compiled_len(&program);
    let greedy_pick = greedy_candidates(&program)
        .map(|c| compiled_len(&c))
        .find(|&len| len < initial);

    let considerate = Optimizer::new(limits(1, 2)).considerate(program).unwrap();
    if let Some(greedy_len) = greedy_pick {
        assert!(considerate.final_len <= greedy_len);
    }
}

#[test]
fn parallel_matches_sequential() {
    let sequential = Optimizer::new(limits(5, 3)).considerate(sample()).unwrap();
    let parallel = Optimizer::new(limits(5, 3))
        .considerate_parallel(sample())
        .unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn run_dispatches_on_strategy() {
    let base = limits(5, 3);
    let greedy = OptimizeOptions::new(Strategy::Greedy, base);
    assert_eq!(
        Optimizer::new(base).run(sample(), &greedy).unwrap(),
        Optimizer::new(base).greedy(sample()).unwrap()
    );

    let considerate = OptimizeOptions::new(Strategy::Considerate, base).with_parallel(true);
    assert_eq!(
        Optimizer::new(base).run(sample(), &considerate).unwrap(),
        Optimizer::new(base).considerate(sample()).unwrap()
    );
}

#[test]
fn builder_is_reused_across_candidates() {
    let mut optimizer = Optimizer::new(limits(3, 3));
    optimizer.greedy(sample()).unwrap();
    let stats = optimizer.builder().stats();
    assert!(stats.hits > 0);
    assert!(stats.entries > 0);
}

#[test]
fn absent_top_level_is_reported() {
    let program = Program::new(vec![leaf("a"), Node::Absent]);
    let result = Optimizer::new(limits(3, 3)).greedy(program);
    assert!(matches!(
        result,
        Err(OptimizeError::Build(psll_build::BuildError::AbsentTopLevel { index: 1 }))
    ));
}
