//! Arena-backed doubly linked list
//!
//! Nodes live in a slot vector and link to each other by index:
//! ```text
//!   head                                  tail
//!    │                                     │
//!    ▼                                     ▼
//! ┌──────┐ next ┌──────┐ next      next ┌──────┐
//! │ slot │ ───→ │ slot │ ───→ ┄┄ ───→   │ slot │ ─→ None
//! │  3   │ ←─── │  0   │ ←─── ┄┄ ←───   │  5   │
//! └──────┘ prev └──────┘ prev      prev └──────┘
//!    │
//!    └─ prev: None
//! ```
//! Removed slots go on a free list and are reused by later appends, so a
//! `NodeId` is only meaningful while its node is linked.

use std::iter::FusedIterator;

/// Stable handle to a linked node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

/// Neighbours of a node at the moment it was unlinked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unlinked {
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct SongList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> SongList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.next)
    }

    pub fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.prev)
    }

    /// Find the predecessor of `id` by walking forward from the head
    ///
    /// Ignores stored back links.
    pub fn prev_by_scan(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = self.head?;
        if cursor == id {
            return None;
        }
        loop {
            let next = self.next_of(cursor)?;
            if next == id {
                return Some(cursor);
            }
            cursor = next;
        }
    }

    /// Append a value after the tail
    pub fn push_back(&mut self, value: T) -> NodeId {
        let node = Node {
            value,
            next: None,
            prev: self.tail,
        };

        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };

        match self.tail.and_then(|tail| self.node_mut(tail)) {
            Some(tail) => tail.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Node at a 1-based position, walking in from the nearer end
    pub fn node_at(&self, position: usize) -> Option<NodeId> {
        if position == 0 || position > self.len {
            return None;
        }

        if position <= self.len / 2 + 1 {
            let mut cursor = self.head()?;
            for _ in 1..position {
                cursor = self.next_of(cursor)?;
            }
            Some(cursor)
        } else {
            let mut cursor = self.tail()?;
            for _ in position..self.len {
                cursor = self.prev_of(cursor)?;
            }
            Some(cursor)
        }
    }

    /// Excise a node, relinking both neighbours
    ///
    /// Returns the value together with the neighbours it had, or `None` if
    /// `id` is not linked.
    pub fn unlink(&mut self, id: NodeId) -> Option<(T, Unlinked)> {
        let node = self.slots.get_mut(id.0)?.take()?;

        match node.prev.and_then(|prev| self.node_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.node_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        self.free.push(id.0);
        self.len -= 1;

        let neighbours = Unlinked {
            prev: node.prev,
            next: node.next,
        };
        Some((node.value, neighbours))
    }

    /// Values front to back; reversible
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Walk both directions and confirm every link agrees
    #[cfg(test)]
    pub fn assert_consistent(&self) {
        let mut forward = Vec::new();
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id).expect("linked id points at empty slot");
            assert_eq!(node.prev, prev, "back link mismatch at {:?}", id);
            forward.push(id);
            assert!(forward.len() <= self.len, "cycle detected");
            prev = Some(id);
            cursor = node.next;
        }
        assert_eq!(forward.len(), self.len);
        assert_eq!(prev, self.tail);

        let mut backward = Vec::new();
        let mut cursor = self.tail;
        while let Some(id) = cursor {
            backward.push(id);
            cursor = self.prev_of(id);
        }
        backward.reverse();
        assert_eq!(forward, backward);

        let live = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(live, self.len, "unreachable live slot");
    }
}

impl<T> Default for SongList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over list values
pub struct Iter<'a, T> {
    list: &'a SongList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let node = self.list.node(id)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let node = self.list.node(id)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}
