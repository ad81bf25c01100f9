use super::*;
use crate::Program;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn t(root: &str, left: Node, right: Node) -> Node {
    Node::ternary(root, left, right)
}

#[test]
fn structurally_equal_nodes_are_equal() {
    let a = t("set", Node::leaf("a"), t("+", "1".into(), "1".into()));
    let b = t("set", Node::leaf("a"), t("+", "1".into(), "1".into()));
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn different_roots_differ() {
    let a = t("set", Node::leaf("a"), Node::Absent);
    let b = t("out", Node::leaf("a"), Node::Absent);
    assert_ne!(a, b);
}

#[test]
fn slot_order_matters() {
    let a = Node::wrap_left(Node::leaf("x"));
    let b = Node::wrap_right(Node::leaf("x"));
    assert_ne!(a, b);
}

#[test]
fn leaf_differs_from_childless_ternary() {
    assert_ne!(Node::leaf("a"), t("a", Node::Absent, Node::Absent));
}

#[test]
fn shared_subtrees_hash_once() {
    let shared = t("chr", "32".into(), Node::Absent);
    let mut set = HashSet::new();
    set.insert(shared.clone());
    set.insert(Node::wrap_left(shared.clone()));
    set.insert(t("chr", "32".into(), Node::Absent));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&shared));
}

#[test]
fn display_is_sexpr() {
    let node = t("out", t("chr", "32".into(), Node::Absent), "b".into());
    assert_eq!(node.to_string(), "(out (chr 32 _) b)");
    assert_eq!(Node::merge("a".into(), "b".into()).to_string(), "(\"\" a b)");
    assert_eq!(Node::leaf("").to_string(), "\"\"");
}

#[test]
fn size_and_depth() {
    let node = t("set", "a".into(), t("+", "1".into(), "1".into()));
    assert_eq!(node.size(), 5);
    assert_eq!(node.depth(), 3);
    assert_eq!(Node::Absent.depth(), 1);
}

#[test]
fn as_ternary_exposes_slots() {
    let node = t("set", "a".into(), Node::Absent);
    let body = node.as_ternary();
    assert!(body.is_some());
    if let Some(body) = body {
        assert_eq!(body.root(), "set");
        assert_eq!(body.left(), &Node::leaf("a"));
        assert!(body.right().is_absent());
    }
    assert!(Node::leaf("a").as_ternary().is_none());
}

#[test]
fn replace_window_shares_untouched_nodes() {
    let program = Program::new(vec!["a".into(), "b".into(), "c".into()]);
    let merged = program.replace_window(1, 2, Node::merge("b".into(), "c".into()));
    assert_eq!(
        merged,
        Some(Program::new(vec![
            "a".into(),
            Node::merge("b".into(), "c".into())
        ]))
    );
    assert_eq!(program.len(), 3);
    assert_eq!(program.replace_window(2, 2, Node::Absent), None);
}

#[test]
fn program_display() {
    let program: Program = vec![Node::leaf("a"), Node::wrap_left("b".into())]
        .into_iter()
        .collect();
    assert_eq!(program.to_string(), "a (\"\" b _)");
}
