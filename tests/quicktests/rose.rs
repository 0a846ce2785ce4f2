use recursive_trees::rose::Tree;

use crate::{init_tracing, is_heap, ArbitraryHeap, ArbitraryTree};

fn sorted_values(tree: &Tree<i8>) -> Vec<i8> {
    let mut values: Vec<i8> = tree.values().into_iter().copied().collect();
    values.sort_unstable();
    values
}

/// The child indices the root value of `tree` passes through when it is sunk:
/// at each node, the first non-empty child with the largest root, for as long
/// as that root is larger than the sinking value.
fn sink_path(tree: &Tree<i8>) -> Vec<usize> {
    let mut path = Vec::new();
    let value = match tree.root() {
        Some(value) => *value,
        None => return path,
    };

    let mut node = tree;
    loop {
        let mut largest: Option<(usize, i8)> = None;
        for (index, subtree) in node.subtrees().iter().enumerate() {
            if let Some(&root) = subtree.root() {
                if largest.map_or(true, |(_, max)| root > max) {
                    largest = Some((index, root));
                }
            }
        }

        match largest {
            Some((index, max)) if max > value => {
                path.push(index);
                node = &node.subtrees()[index];
            }
            _ => return path,
        }
    }
}

#[quickcheck]
fn swap_down_lands_root_where_it_fits(tree: ArbitraryTree) -> bool {
    init_tracing();
    let mut tree = tree.0;
    let value = tree.root().copied();
    let path = sink_path(&tree);
    tree.swap_down();

    let mut landed = &tree;
    for index in &path {
        landed = &landed.subtrees()[*index];
    }

    landed.root().copied() == value
        && landed
            .subtrees()
            .iter()
            .filter_map(Tree::root)
            .all(|child| value >= Some(*child))
}

#[quickcheck]
fn swap_down_lifts_largest_child(tree: ArbitraryTree) -> bool {
    init_tracing();
    let mut tree = tree.0;
    let before = tree.clone();
    tree.swap_down();

    let root = tree.root();
    let largest_before = before.subtrees().iter().filter_map(Tree::root).max();

    // The new root is the old root or the largest child it traded places with.
    root >= before.root()
        && before.subtrees().iter().filter_map(Tree::root).all(|child| root >= Some(child))
        && (root == before.root() || root == largest_before)
}

#[quickcheck]
fn swap_down_permutes_values(tree: ArbitraryTree) -> bool {
    init_tracing();
    let mut tree = tree.0;
    let before = sorted_values(&tree);
    let len = tree.len();
    tree.swap_down();

    sorted_values(&tree) == before && tree.len() == len
}

#[quickcheck]
fn swap_down_leaves_heap_alone(heap: ArbitraryHeap) -> bool {
    init_tracing();
    let mut tree = heap.0;
    let before = tree.clone();
    tree.swap_down();

    tree == before
}

#[quickcheck]
fn swap_down_repairs_heap_root(heap: ArbitraryHeap, new_root: i8) -> bool {
    init_tracing();
    let mut tree = heap.0;
    tree.set_root(new_root);
    tree.swap_down();
    let once = tree.clone();
    tree.swap_down();

    is_heap(&once) && tree == once
}

#[quickcheck]
fn swap_down_keeps_shape(tree: ArbitraryTree) -> bool {
    fn shape(tree: &Tree<i8>) -> Vec<usize> {
        let mut widths = vec![tree.subtrees().len()];
        for subtree in tree.subtrees() {
            widths.extend(shape(subtree));
        }
        widths
    }

    let mut tree = tree.0;
    let before = shape(&tree);
    tree.swap_down();

    shape(&tree) == before
}

#[quickcheck]
fn display_has_a_line_per_value(tree: ArbitraryTree) -> bool {
    let tree = tree.0;

    tree.to_string().lines().count() == tree.len()
}
