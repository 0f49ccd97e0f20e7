//! Read-only operations on a subtree.
//!
//! Every function takes the root of the subtree to inspect, so they work on
//! any node reachable from a tree, not only on the tree's root. An absent root
//! is an empty subtree.

use std::collections::VecDeque;

use crate::node::Node;

/// Returns the cached height of the subtree, 0 if absent.
pub fn height<K>(root: Option<&Node<K>>) -> usize {
    root.map_or(0, Node::height)
}

/// Returns the balance factor of the subtree root, 0 if absent.
pub fn balance_factor<K>(root: Option<&Node<K>>) -> isize {
    root.map_or(0, Node::balance_factor)
}

/// Walks the subtree depth-first, calling `preorder` before the left subtree,
/// `inorder` between the subtrees and `postorder` after the right subtree.
pub fn traverse<'a, K, Pre, In, Post>(
    root: Option<&'a Node<K>>,
    mut preorder: Pre,
    mut inorder: In,
    mut postorder: Post,
) where
    Pre: FnMut(&'a Node<K>),
    In: FnMut(&'a Node<K>),
    Post: FnMut(&'a Node<K>),
{
    fn walk<'a, K, Pre, In, Post>(
        node: Option<&'a Node<K>>,
        preorder: &mut Pre,
        inorder: &mut In,
        postorder: &mut Post,
    ) where
        Pre: FnMut(&'a Node<K>),
        In: FnMut(&'a Node<K>),
        Post: FnMut(&'a Node<K>),
    {
        if let Some(node) = node {
            preorder(node);
            walk(node.left(), preorder, inorder, postorder);
            inorder(node);
            walk(node.right(), preorder, inorder, postorder);
            postorder(node);
        }
    }

    walk(root, &mut preorder, &mut inorder, &mut postorder);
}

/// Returns the keys in pre-order (node, left, right).
pub fn pre_order<K>(root: Option<&Node<K>>) -> Vec<&K> {
    let mut keys = Vec::new();
    traverse(root, |node| keys.push(node.key()), |_| {}, |_| {});
    keys
}

/// Returns the keys in-order (left, node, right), i.e. ascending.
pub fn in_order<K>(root: Option<&Node<K>>) -> Vec<&K> {
    let mut keys = Vec::new();
    traverse(root, |_| {}, |node| keys.push(node.key()), |_| {});
    keys
}

/// Returns the keys in post-order (left, right, node).
pub fn post_order<K>(root: Option<&Node<K>>) -> Vec<&K> {
    let mut keys = Vec::new();
    traverse(root, |_| {}, |_| {}, |node| keys.push(node.key()));
    keys
}

/// Returns the keys level by level, left to right within a level.
pub fn level_order<K>(root: Option<&Node<K>>) -> Vec<&K> {
    let mut keys = Vec::new();
    let mut queue: VecDeque<&Node<K>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        keys.push(node.key());
        queue.extend(node.left());
        queue.extend(node.right());
    }
    keys
}

/// Returns the smallest key of the subtree.
pub fn find_min<K>(root: Option<&Node<K>>) -> Option<&K> {
    let mut current = root?;
    while let Some(left) = current.left() {
        current = left;
    }
    Some(current.key())
}

/// Returns the largest key of the subtree.
pub fn find_max<K>(root: Option<&Node<K>>) -> Option<&K> {
    let mut current = root?;
    while let Some(right) = current.right() {
        current = right;
    }
    Some(current.key())
}

/// Returns the sum of all keys of the subtree.
pub fn sum_values<K: Copy + Into<i128>>(root: Option<&Node<K>>) -> i128 {
    match root {
        None => 0,
        Some(node) => {
            (*node.key()).into() + sum_values(node.left()) + sum_values(node.right())
        }
    }
}
