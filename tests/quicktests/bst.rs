use recursive_trees::bst::BinarySearchTree;

use std::collections::HashSet;

fn build(xs: &[i8]) -> BinarySearchTree<i8> {
    xs.iter().copied().collect()
}

fn sorted(xs: &[i8]) -> Vec<i8> {
    let mut sorted = xs.to_vec();
    sorted.sort_unstable();
    sorted
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn items_are_sorted_inserts(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let items: Vec<i8> = tree.items().into_iter().copied().collect();

    items == sorted(&xs) && tree.len() == xs.len()
}

#[quickcheck]
fn count_matches_items(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree = build(&xs);
    let items = tree.items();

    xs.iter()
        .chain(&probes)
        .all(|x| tree.count(x) == items.iter().filter(|item| **item == x).count())
}

#[quickcheck]
fn smaller_is_prefix_of_items(xs: Vec<i8>, bound: i8) -> bool {
    let tree = build(&xs);
    let expected: Vec<&i8> = tree
        .items()
        .into_iter()
        .filter(|item| **item < bound)
        .collect();

    tree.smaller(&bound) == expected
}

#[quickcheck]
fn maximum_is_last_item(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.maximum() == tree.items().last().copied() && tree.maximum() == xs.iter().max()
}

#[quickcheck]
fn inserts_keep_order(xs: Vec<i8>) -> bool {
    build(&xs).check_order().is_ok()
}

#[quickcheck]
fn display_has_a_line_per_value(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.to_string().lines().count() == xs.len()
}

#[quickcheck]
fn empty_tree_is_empty(probe: i8) -> bool {
    let tree = BinarySearchTree::<i8>::new(None);

    tree.is_empty()
        && tree.items().is_empty()
        && tree.maximum().is_none()
        && tree.count(&probe) == 0
        && !tree.contains(&probe)
}
