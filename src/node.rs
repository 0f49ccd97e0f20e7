use std::cmp;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single tree entry, exclusively owning its child subtrees.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: usize,
}

impl<K> Node<K> {
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the left child, holding all smaller keys.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Returns the right child, holding all greater keys.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Returns the cached height of the subtree rooted here.
    /// A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns height of left subtree minus height of right subtree.
    pub fn balance_factor(&self) -> isize {
        link_height(&self.left) as isize - link_height(&self.right) as isize
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + cmp::max(link_height(&self.left), link_height(&self.right));
    }
}

pub(crate) fn link_height<K>(link: &Link<K>) -> usize {
    match link {
        None => 0,
        Some(node) => node.height,
    }
}
