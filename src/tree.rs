use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{Link, Node};
use crate::query;

/// A set of keys kept in an AVL tree.
///
/// ```
/// use avltree::AvlTree;
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
/// assert_eq!(tree.root().map(|root| *root.key()), Some(20));
/// assert_eq!(tree.in_order(), vec![&10, &20, &30]);
/// ```
pub struct AvlTree<K> {
    root: Link<K>,
    num_nodes: usize,
}

/// An in-order iterator over the keys of a tree.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<K> AvlTree<K> {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, 0 if empty.
    pub fn height(&self) -> usize {
        query::height(self.root())
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns the keys in pre-order (node, left, right).
    pub fn pre_order(&self) -> Vec<&K> {
        query::pre_order(self.root())
    }

    /// Returns the keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        query::in_order(self.root())
    }

    /// Returns the keys in post-order (left, right, node).
    pub fn post_order(&self) -> Vec<&K> {
        query::post_order(self.root())
    }

    /// Returns the keys level by level, starting at the root.
    pub fn level_order(&self) -> Vec<&K> {
        query::level_order(self.root())
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    pub fn find_min(&self) -> Option<&K> {
        query::find_min(self.root())
    }

    /// Returns the largest key, or `None` if the tree is empty.
    pub fn find_max(&self) -> Option<&K> {
        query::find_max(self.root())
    }

    /// Gets an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.num_nodes)
    }
}

impl<K: Copy + Into<i128>> AvlTree<K> {
    /// Returns the sum of all keys, 0 if empty.
    pub fn sum_values(&self) -> i128 {
        query::sum_values(self.root())
    }
}

impl<K: Ord> AvlTree<K> {
    /// Returns a reference to the key in the tree that is equal to the given key.
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            }
        }
        None
    }

    /// Returns true if the tree contains the key.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key into the tree and restores balance along the insertion path.
    /// Returns false, leaving the tree untouched, if the key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, descent) = Self::insert_node(self.root.take(), key);
        self.root = Some(root);
        if descent.is_none() {
            return false;
        }
        self.num_nodes += 1;
        debug!(len = self.num_nodes, height = self.height(), "inserted key");
        true
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Returns (height, number of nodes) of the checked subtree
        fn check<K: Ord>(node: &Node<K>) -> (usize, usize) {
            let mut left_height = 0;
            let mut right_height = 0;
            let mut num_nodes = 1;

            // Check left subtree
            if let Some(left) = node.left() {
                assert!(left.key < node.key);
                let (height, count) = check(left);
                left_height = height;
                num_nodes += count;
            }

            // Check right subtree
            if let Some(right) = node.right() {
                assert!(right.key > node.key);
                let (height, count) = check(right);
                right_height = height;
                num_nodes += count;
            }

            // Check cached height
            assert_eq!(node.height, 1 + left_height.max(right_height));

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            (node.height, num_nodes)
        }

        let num_nodes = self.root().map_or(0, |root| check(root).1);
        assert_eq!(num_nodes, self.num_nodes);
        assert!(query::in_order(self.root()).windows(2).all(|w| w[0] < w[1]));
    }

    // Inserts key into the subtree owned by `link` and returns the new subtree root,
    // together with the direction the key took at that root:
    // `Equal` if the root is the new leaf, `None` if the key was already present.
    fn insert_node(link: Link<K>, key: K) -> (Box<Node<K>>, Option<Ordering>) {
        let mut node = match link {
            None => return (Node::leaf(key), Some(Ordering::Equal)),
            Some(node) => node,
        };

        let direction = key.cmp(&node.key);
        let child_direction = match direction {
            Ordering::Equal => return (node, None),
            Ordering::Less => {
                let (left, child_direction) = Self::insert_node(node.left.take(), key);
                node.left = Some(left);
                child_direction
            }
            Ordering::Greater => {
                let (right, child_direction) = Self::insert_node(node.right.take(), key);
                node.right = Some(right);
                child_direction
            }
        };

        // Duplicate below, nothing changed on the way up
        let Some(child_direction) = child_direction else {
            return (node, None);
        };

        node.update_height();
        (Self::rebalance(node, child_direction), Some(direction))
    }

    // Restores the AVL condition at `node` after a single insert.
    // `child_direction` is how the inserted key compared to the key of the child
    // the insert descended into. That child is the root of the grown subtree,
    // since a rotated subtree does not change height.
    fn rebalance(mut node: Box<Node<K>>, child_direction: Ordering) -> Box<Node<K>> {
        let balance = node.balance_factor();
        debug_assert!((-2..=2).contains(&balance));
        debug_assert!(balance.abs() <= 1 || child_direction != Ordering::Equal);

        if balance > 1 && child_direction == Ordering::Less {
            trace!(case = "left-left", "rebalancing");
            return Self::rotate_right(node);
        }
        if balance < -1 && child_direction == Ordering::Greater {
            trace!(case = "right-right", "rebalancing");
            return Self::rotate_left(node);
        }
        if balance > 1 && child_direction == Ordering::Greater {
            trace!(case = "left-right", "rebalancing");
            node.left = node.left.take().map(Self::rotate_left);
            return Self::rotate_right(node);
        }
        if balance < -1 && child_direction == Ordering::Less {
            trace!(case = "right-left", "rebalancing");
            node.right = node.right.take().map(Self::rotate_right);
            return Self::rotate_left(node);
        }
        node
    }

    //     y          x
    //    / \        / \
    //   x   C  ->  A   y
    //  / \            / \
    // A   B          B   C
    fn rotate_right(mut y: Box<Node<K>>) -> Box<Node<K>> {
        debug_assert!(y.left.is_some(), "rotate_right requires a left child");
        let Some(mut x) = y.left.take() else {
            return y;
        };
        y.left = x.right.take();
        y.update_height();
        x.right = Some(y);
        x.update_height();
        x
    }

    //   x              y
    //  / \            / \
    // A   y    ->    x   C
    //    / \        / \
    //   B   C      A   B
    fn rotate_left(mut x: Box<Node<K>>) -> Box<Node<K>> {
        debug_assert!(x.right.is_some(), "rotate_left requires a right child");
        let Some(mut y) = x.right.take() else {
            return x;
        };
        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();
        y
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}
