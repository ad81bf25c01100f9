use super::*;
use pretty_assertions::assert_eq;

fn tree(text: &str) -> Tree {
    Tree::from_text(text)
}

#[test]
fn new_rejects_empty_grid() {
    assert_eq!(Tree::new(Vec::new()), Err(ShapeError::EmptyGrid));
}

#[test]
fn new_rejects_ragged_rows() {
    let rows = vec![Row::new(1, "^", 1), Row::new(0, "---", 1)];
    assert_eq!(
        Tree::new(rows),
        Err(ShapeError::RaggedRow {
            row: 1,
            found: 4,
            expected: 3
        })
    );
}

#[test]
fn first_and_last_rows() {
    let t = tree("sup");
    assert_eq!(t.first_row(), &Row::new(3, "^", 3));
    assert_eq!(t.last_row(), &Row::new(1, "-----", 1));
}

#[test]
fn tight_side_by_side() {
    let joined = tree("hi").beside(&tree("sup")).unwrap();
    assert_eq!(
        joined.to_string(),
        "   ^    ^   \n  / \\  / \\  \n /hi \\/sup\\ \n ---------- "
    );
    assert_eq!(tree("hi").squeeze(&tree("sup")), 2);
}

#[test]
fn loose_side_by_side_keeps_bounding_boxes() {
    let (a, b) = (tree("hi"), tree("salut"));
    let joined = a.add_side_by_side(&b, Spacing::loose()).unwrap();
    assert_eq!(joined.width(), a.width() + b.width());
    assert_eq!(joined.height(), a.height().max(b.height()));
}

#[test]
fn shorter_tree_is_padded_below() {
    let (a, b) = (tree("a"), tree("salut"));
    let joined = a.beside(&b).unwrap();
    assert_eq!(joined.height(), b.height());
    let squeeze = usize::try_from(a.squeeze(&b)).unwrap();
    assert_eq!(joined.width(), a.width() + b.width() - squeeze);
    let bottom = joined.last_row();
    assert_eq!(bottom.content, "-------");
    assert_eq!(bottom.right, 1);
}

#[test]
fn min_spacing_separates_apexes() {
    let joined = tree("a")
        .add_side_by_side(&tree("b"), Spacing::tight().with_min_spacing(7))
        .unwrap();
    assert_eq!(joined.first_row().content, format!("^{}^", " ".repeat(7)));
}

#[test]
fn odd_spacing_between_apexes() {
    // Tight packing of two one-level pyramids leaves two blanks between apexes
    let tight = tree("a").beside(&tree("b")).unwrap();
    assert_eq!(tight.first_row().content, "^  ^");

    let odd = tree("a")
        .add_side_by_side(&tree("b"), Spacing::tight().odd())
        .unwrap();
    assert_eq!(odd.first_row().content, "^   ^");
}

#[test]
fn left_child() {
    let out = tree("out").add_one_child(&tree("a"), Side::Left).unwrap();
    assert_eq!(
        out.to_string(),
        "     ^   \n    / \\  \n   /out\\ \n  ^----- \n /a\\     \n ---     "
    );
}

#[test]
fn right_child() {
    let t = tree("x").add_one_child(&tree("y"), Side::Right).unwrap();
    assert_eq!(t.to_string(), "  ^    \n /x\\   \n ---^  \n   /y\\ \n   --- ");
}

#[test]
fn left_child_wider_than_parent() {
    let t = tree("").add_one_child(&tree("sup"), Side::Left).unwrap();
    assert_eq!(t.to_string(), "    ^  \n   ^-  \n  / \\  \n /sup\\ \n ----- ");
}

#[test]
fn two_children() {
    let set = tree("set").add_two_children(&tree("a"), &tree("1")).unwrap();
    assert_eq!(
        set.to_string(),
        "     ^     \n    / \\    \n   /set\\   \n  ^-----^  \n /a\\   /1\\ \n ---   --- "
    );
}

#[test]
fn wide_children_grow_the_parent() {
    let children = (tree("long_variable_name"), tree("another_long_name"));
    let parent = tree("-");
    let grown = parent.add_two_children(&children.0, &children.1).unwrap();
    assert!(grown.width() > parent.width());
    assert_eq!(grown.first_row().content, "^");

    let base_row = grown
        .rows()
        .iter()
        .position(|row| row.content.starts_with("^-"))
        .unwrap();
    assert!(base_row + 1 > parent.height());
}

#[test]
fn two_children_need_a_single_pyramid() {
    let parent = tree("hi").beside(&tree("sup")).unwrap();
    let child = tree("sup");
    assert_eq!(
        parent.add_two_children(&child, &child),
        Err(ShapeError::NonExpandableParent)
    );

    let one_child = tree("x").add_one_child(&child, Side::Left).unwrap();
    assert_eq!(
        one_child.attach(Some(&child), Some(&child)),
        Err(ShapeError::NonExpandableParent)
    );
}

#[test]
fn attach_dispatches_on_children() {
    let (parent, child) = (tree("out"), tree("a"));
    assert_eq!(parent.attach(None, None).unwrap(), parent);
    assert_eq!(
        parent.attach(Some(&child), None).unwrap(),
        parent.add_one_child(&child, Side::Left).unwrap()
    );
    assert_eq!(
        parent.attach(None, Some(&child)).unwrap(),
        parent.add_one_child(&child, Side::Right).unwrap()
    );
    assert_eq!(
        parent.attach(Some(&child), Some(&child)).unwrap(),
        parent.add_two_children(&child, &child).unwrap()
    );
}

#[test]
fn negative_pad_is_an_error() {
    assert_eq!(pad(-3), Err(ShapeError::NegativePadding { pad: -3 }));
    assert_eq!(pad(3), Ok(3));
}
