//! Max-oriented pairing heap with updatable handles.
//!
//! Holds pending flights keyed by their priority key, supporting insert,
//! extract-max, in-place key change in either direction, and deletion of
//! an arbitrary live entry — all in amortized logarithmic time.
//!
//! # Design
//!
//! Nodes live in an arena of `u32`-indexed slots rather than behind raw
//! links; [`Handle`]s returned to callers carry the slot index plus a
//! generation counter, so operations on a handle whose entry has since
//! been removed are defined no-ops rather than errors. Each node holds a
//! `child` link to its first child, a `sibling` link to the next child of
//! its parent, and a `prev` back-link (the parent when first child,
//! otherwise the left sibling) that makes arbitrary detachment O(1).
//!
//! Sibling collapse after removing a node uses the two-pass scheme —
//! merge adjacent pairs left-to-right, then fold the results
//! right-to-left — which is what gives the amortized bounds; a single
//! left-to-right fold would not.
//!
//! # Key changes
//!
//! An *increase* leaves the changed node's subtree heap-ordered, so a
//! non-root node is cut with its subtree and re-merged with the root (in
//! place if it already is the root). A *decrease* may leave the node
//! outranked by its own children, so the node is fully detached — its
//! children collapsed back into the heap — before re-merging. Extraction
//! order therefore always matches sorting the live entries by key.

use std::cmp::Ordering;

/// Opaque reference to a live heap entry.
///
/// Invalidated when the entry is removed (by `pop`, `remove`, or
/// `clear`); using a stale handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    child: Option<u32>,
    sibling: Option<u32>,
    prev: Option<u32>,
}

#[derive(Debug, Clone)]
struct Slot<K, V> {
    generation: u32,
    node: Option<Node<K, V>>,
}

/// A max-oriented pairing heap over `(K, V)` entries.
#[derive(Debug, Clone)]
pub struct PairingHeap<K: Ord, V: Copy> {
    slots: Vec<Slot<K, V>>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
}

impl<K: Ord, V: Copy> Default for PairingHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Copy> PairingHeap<K, V> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the handle still refers to a live entry.
    pub fn contains(&self, handle: Handle) -> bool {
        self.slots
            .get(handle.index as usize)
            .is_some_and(|slot| slot.generation == handle.generation && slot.node.is_some())
    }

    /// Value of the maximum entry, if any.
    pub fn peek(&self) -> Option<V> {
        let root = self.root?;
        Some(self.node(root).value)
    }

    /// Inserts an entry and returns a handle to it.
    pub fn push(&mut self, key: K, value: V) -> Handle {
        let idx = self.alloc(key, value);
        self.root = Some(self.merge_opt(self.root, idx));
        self.len += 1;
        Handle {
            index: idx,
            generation: self.slots[idx as usize].generation,
        }
    }

    /// Removes and returns the value of the maximum entry.
    pub fn pop(&mut self) -> Option<V> {
        let root = self.root?;
        let first_child = self.node(root).child;
        let value = self.node(root).value;
        self.release(root);
        self.root = self.collapse_siblings(first_child);
        self.len -= 1;
        Some(value)
    }

    /// Removes the entry behind `handle`, wherever it sits in the heap.
    ///
    /// Returns the removed value, or `None` if the handle is stale.
    pub fn remove(&mut self, handle: Handle) -> Option<V> {
        if !self.contains(handle) {
            return None;
        }
        let idx = handle.index;
        if self.root == Some(idx) {
            return self.pop();
        }
        self.detach(idx);
        let value = self.node(idx).value;
        self.release(idx);
        self.len -= 1;
        Some(value)
    }

    /// Repositions the entry behind `handle` under a new key.
    ///
    /// No-op if the handle is stale or the key is unchanged.
    pub fn update_key(&mut self, handle: Handle, new_key: K) {
        if !self.contains(handle) {
            return;
        }
        let idx = handle.index;
        match new_key.cmp(&self.node(idx).key) {
            Ordering::Equal => {}
            Ordering::Greater => {
                self.node_mut(idx).key = new_key;
                if self.root != Some(idx) {
                    self.cut(idx);
                    self.root = Some(self.merge_opt(self.root, idx));
                }
            }
            Ordering::Less => {
                // The node's children may now outrank it: give them back
                // to the heap before re-merging the lone node.
                self.detach(idx);
                self.node_mut(idx).key = new_key;
                self.root = Some(self.merge_opt(self.root, idx));
            }
        }
    }

    /// Removes every entry, invalidating all handles.
    pub fn clear(&mut self) {
        for idx in 0..self.slots.len() {
            if self.slots[idx].node.is_some() {
                self.release(idx as u32);
            }
        }
        self.root = None;
        self.len = 0;
    }

    fn node(&self, idx: u32) -> &Node<K, V> {
        self.slots[idx as usize]
            .node
            .as_ref()
            .expect("live heap index")
    }

    fn node_mut(&mut self, idx: u32) -> &mut Node<K, V> {
        self.slots[idx as usize]
            .node
            .as_mut()
            .expect("live heap index")
    }

    fn alloc(&mut self, key: K, value: V) -> u32 {
        let node = Node {
            key,
            value,
            child: None,
            sibling: None,
            prev: None,
        };
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize].node = Some(node);
            idx
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            (self.slots.len() - 1) as u32
        }
    }

    /// Frees a slot, bumping its generation so stale handles miss.
    fn release(&mut self, idx: u32) {
        let slot = &mut self.slots[idx as usize];
        slot.node = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(idx);
    }

    /// Merges two heap-ordered trees; the larger key becomes the root and
    /// the other tree its first child.
    fn merge(&mut self, a: u32, b: u32) -> u32 {
        let (winner, loser) = if self.node(a).key > self.node(b).key {
            (a, b)
        } else {
            (b, a)
        };
        let old_child = self.node(winner).child;
        {
            let loser_node = self.node_mut(loser);
            loser_node.prev = Some(winner);
            loser_node.sibling = old_child;
        }
        if let Some(child) = old_child {
            self.node_mut(child).prev = Some(loser);
        }
        self.node_mut(winner).child = Some(loser);
        winner
    }

    fn merge_opt(&mut self, a: Option<u32>, b: u32) -> u32 {
        match a {
            Some(a) => self.merge(a, b),
            None => b,
        }
    }

    /// Collapses a chain of siblings into one tree: merge adjacent pairs
    /// left to right, then fold the merged pairs right to left.
    fn collapse_siblings(&mut self, first: Option<u32>) -> Option<u32> {
        let mut pairs: Vec<u32> = Vec::new();
        let mut cursor = first;
        while let Some(a) = cursor {
            let next = self.node(a).sibling;
            self.isolate(a);
            match next {
                Some(b) => {
                    cursor = self.node(b).sibling;
                    self.isolate(b);
                    pairs.push(self.merge(a, b));
                }
                None => {
                    pairs.push(a);
                    cursor = None;
                }
            }
        }

        let mut result: Option<u32> = None;
        while let Some(tree) = pairs.pop() {
            result = Some(self.merge_opt(result, tree));
        }
        result
    }

    /// Unlinks a non-root node from its parent/sibling chain, keeping its
    /// own subtree attached.
    fn cut(&mut self, idx: u32) {
        let (prev, sibling) = {
            let node = self.node(idx);
            (node.prev, node.sibling)
        };
        if let Some(prev) = prev {
            if self.node(prev).child == Some(idx) {
                self.node_mut(prev).child = sibling;
            } else {
                self.node_mut(prev).sibling = sibling;
            }
        }
        if let Some(sibling) = sibling {
            self.node_mut(sibling).prev = prev;
        }
        let node = self.node_mut(idx);
        node.prev = None;
        node.sibling = None;
    }

    /// Clears a node's chain links without rewiring neighbors.
    fn isolate(&mut self, idx: u32) {
        let node = self.node_mut(idx);
        node.prev = None;
        node.sibling = None;
    }

    /// Removes a node from the tree entirely, collapsing its children
    /// back into the heap. The node itself ends up isolated and
    /// childless; the caller decides whether to free or re-merge it.
    fn detach(&mut self, idx: u32) {
        if self.root == Some(idx) {
            let first_child = self.node_mut(idx).child.take();
            self.root = self.collapse_siblings(first_child);
            return;
        }
        self.cut(idx);
        let first_child = self.node_mut(idx).child.take();
        if let Some(subtree) = self.collapse_siblings(first_child) {
            self.root = Some(self.merge_opt(self.root, subtree));
        }
    }
}
