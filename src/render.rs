//! Read-only renderings of a subtree for display.
//!
//! Nodes are laid out by layer: the root sits at `(0, 0)` and every child is
//! one unit below its parent, shifted left or right by `1 / 2^layer`, so
//! subtrees never overlap horizontally.

use std::fmt::{Display, Write};

use crate::node::Node;

/// Position of a single node in the layered layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a, K> {
    pub key: &'a K,
    pub depth: usize,
    pub x: f64,
    pub y: f64,
}

/// Computes the position of every node, in pre-order.
pub fn layout<K>(root: Option<&Node<K>>) -> Vec<Placement<'_, K>> {
    fn place<'a, K>(node: &'a Node<K>, depth: usize, x: f64, out: &mut Vec<Placement<'a, K>>) {
        out.push(Placement {
            key: node.key(),
            depth,
            x,
            y: 0.0 - depth as f64,
        });
        let offset = 1.0 / f64::powi(2.0, depth as i32 + 1);
        if let Some(left) = node.left() {
            place(left, depth + 1, x - offset, out);
        }
        if let Some(right) = node.right() {
            place(right, depth + 1, x + offset, out);
        }
    }

    let mut placements = Vec::new();
    if let Some(root) = root {
        place(root, 0, 0.0, &mut placements);
    }
    placements
}

/// Returns all (parent, child) key pairs, parents visited in pre-order.
pub fn edges<K>(root: Option<&Node<K>>) -> Vec<(&K, &K)> {
    let mut edges = Vec::new();
    crate::query::traverse(
        root,
        |node| {
            for child in node.left().into_iter().chain(node.right()) {
                edges.push((node.key(), child.key()));
            }
        },
        |_| {},
        |_| {},
    );
    edges
}

/// Renders the subtree as a Graphviz digraph with pinned node positions.
/// Use `neato -n` or `fdp` to honour the positions.
pub fn to_dot<K: Display>(root: Option<&Node<K>>) -> String {
    // Horizontal layout spans [-1, 1], stretch it to something readable
    const X_SCALE: f64 = 8.0;

    let mut dot = String::new();
    dot.push_str("digraph avl {\n");
    dot.push_str("    node [shape=circle, style=filled, fillcolor=skyblue, fontsize=9];\n");
    dot.push_str("    edge [arrowhead=none];\n");
    for placement in layout(root) {
        // Writing to a String cannot fail
        let _ = writeln!(
            dot,
            "    \"{}\" [pos=\"{:.4},{:.4}!\"];",
            placement.key,
            placement.x * X_SCALE,
            placement.y
        );
    }
    for (parent, child) in edges(root) {
        let _ = writeln!(dot, "    \"{}\" -> \"{}\";", parent, child);
    }
    dot.push_str("}\n");
    dot
}

/// Renders the subtree as an indented outline, one node per line.
///
/// ```
/// use avltree::{render, AvlTree};
/// let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
/// assert_eq!(render::to_outline(tree.root()), "2\n  L 1\n  R 3\n");
/// ```
pub fn to_outline<K: Display>(root: Option<&Node<K>>) -> String {
    fn outline<K: Display>(node: &Node<K>, depth: usize, label: &str, out: &mut String) {
        let _ = writeln!(out, "{:indent$}{}{}", "", label, node.key(), indent = depth * 2);
        if let Some(left) = node.left() {
            outline(left, depth + 1, "L ", out);
        }
        if let Some(right) = node.right() {
            outline(right, depth + 1, "R ", out);
        }
    }

    let mut out = String::new();
    if let Some(root) = root {
        outline(root, 0, "", &mut out);
    }
    out
}
