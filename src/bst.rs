//! Unbalanced binary search tree stored as an arena of nodes.
//!
//! Children are indices into the arena; there are no parent links. Keys smaller than a node go
//! left, everything else (including duplicates) goes right. Nothing is ever rebalanced, so the
//! shape, and hence the search cost, depends on the insertion order.
use crate::{SearchIndex, SearchScheme};

#[derive(Clone, Copy, Debug)]
struct Node<K> {
    key: K,
    left: Option<usize>,
    right: Option<usize>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bst<K = i32> {
    nodes: Vec<Node<K>>,
    root: Option<usize>,
}

impl<K> Default for Bst<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<K: Ord> Bst<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Add `key` as a new leaf. Duplicates end up in the right subtree of their equal.
    pub fn insert(&mut self, key: K) {
        let idx = self.nodes.len();
        let Some(mut cur) = self.root else {
            self.nodes.push(Node::new(key));
            self.root = Some(idx);
            return;
        };
        loop {
            let node = &mut self.nodes[cur];
            let child = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            match *child {
                Some(next) => cur = next,
                None => {
                    *child = Some(idx);
                    break;
                }
            }
        }
        self.nodes.push(Node::new(key));
    }

    /// Descend from the root until `key` is found or a missing child is reached.
    pub fn contains(&self, key: &K) -> bool {
        let mut cur = self.root;
        while let Some(idx) = cur {
            let node = &self.nodes[idx];
            if node.key == *key {
                return true;
            }
            cur = if node.key > *key {
                node.left
            } else {
                node.right
            };
        }
        false
    }

    /// Number of nodes on the longest root-to-leaf path. 0 for the empty tree.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        max
    }

    /// Keys in non-decreasing order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder {
            tree: self,
            stack: Vec::new(),
            cur: self.root,
        }
    }
}

pub struct InOrder<'a, K> {
    tree: &'a Bst<K>,
    stack: Vec<usize>,
    cur: Option<usize>,
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.cur {
            self.stack.push(idx);
            self.cur = self.tree.nodes[idx].left;
        }
        let idx = self.stack.pop()?;
        let node = &self.tree.nodes[idx];
        self.cur = node.right;
        Some(&node.key)
    }
}

impl<K: Ord> Extend<K> for Bst<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Bst<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Bst::new();
        tree.extend(iter);
        tree
    }
}

impl SearchIndex for Bst {
    fn new(vals: Vec<i32>) -> Self {
        vals.into_iter().collect()
    }
}

pub struct TreeSearch;

impl SearchScheme<Bst> for TreeSearch {
    fn query_one(&self, index: &Bst, q: i32) -> bool {
        index.contains(&q)
    }
    fn name(&self) -> &'static str {
        "tree_search"
    }
}
