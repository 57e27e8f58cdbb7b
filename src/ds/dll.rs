/// double linked list
use crate::{
    iter::{IntoIter, Iter},
    prelude::*,
};
use std::{fmt, iter::FromIterator, marker::PhantomData, ptr::NonNull};

pub(crate) type Link<Item> = Option<NonNull<Node<Item>>>;

/// A chain element. `next` is the owning edge, `prev` is a back reference
/// used for traversal and splicing only.
pub(crate) struct Node<Item> {
    pub(crate) item: Item,
    pub(crate) prev: Link<Item>,
    pub(crate) next: Link<Item>,
}

impl<Item> Node<Item> {
    fn new(item: Item, prev: Link<Item>, next: Link<Item>) -> Self {
        Self { item, prev, next }
    }
}

fn allocate<Item>(node: Node<Item>) -> NonNull<Node<Item>> {
    NonNull::from(Box::leak(Box::new(node)))
}

/// Decides whether two values are the same for `remove` and `contains`.
pub trait Equivalence<T: ?Sized> {
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Plain `PartialEq` equality
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueEq;

impl<T: PartialEq + ?Sized> Equivalence<T> for ValueEq {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// An ordered, index addressable sequence of heap allocated nodes linked in
/// both directions.
///
/// Every node is reachable from `head` through `next`; `tail` and all `prev`
/// links point into that same chain and never own anything.
pub struct DoublyLinkedList<Item, E = ValueEq> {
    head: Link<Item>,
    tail: Link<Item>,
    size: usize,
    config: Config,
    eq: E,
    _owns: PhantomData<Box<Node<Item>>>,
}

impl<Item> DoublyLinkedList<Item> {
    pub fn new() -> Self {
        Self::from_parts(Config::default(), ValueEq)
    }

    pub fn with_config(config: Config) -> Self {
        Self::from_parts(config, ValueEq)
    }
}

impl<Item> Default for DoublyLinkedList<Item> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Item, E> DoublyLinkedList<Item, E> {
    /// An empty list comparing values with `eq`
    pub fn with_comparator(eq: E) -> Self {
        Self::from_parts(Config::default(), eq)
    }

    pub fn from_parts(config: Config, eq: E) -> Self {
        Self { head: None, tail: None, size: 0, config, eq, _owns: PhantomData }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Add `item` as the new last element
    pub fn append(&mut self, item: Item) {
        let node = allocate(Node::new(item, self.tail, None));

        match self.tail {
            // SAFETY: `tail` always points at a live node owned by this list
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.size += 1;
        log::trace!("append: len {}", self.size);
    }

    /// Add `item` as the new first element
    pub fn prepend(&mut self, item: Item) {
        let node = allocate(Node::new(item, None, self.head));

        match self.head {
            // SAFETY: `head` always points at a live node owned by this list
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }

        self.head = Some(node);
        self.size += 1;
        log::trace!("prepend: len {}", self.size);
    }

    /// Insert `item` so that it ends up at position `index`.
    ///
    /// `index == len()` appends. Anything past that is rejected before the
    /// chain is touched.
    pub fn insert_at(&mut self, index: Idx, item: Item) -> IResult<()> {
        if index > self.size {
            return Err(self.out_of_range(index))
        }

        if index == self.size {
            self.append(item);
        } else if index == 0 {
            self.prepend(item);
        } else {
            let at = self.locate(index)?;
            // SAFETY: `at` came from `locate` and is linked into this list
            unsafe { self.splice_before(at, item) };
            log::trace!("insert at {}: len {}", index, self.size);
        }

        Ok(())
    }

    /// Borrow the value at `index`
    pub fn element_at(&self, index: Idx) -> IResult<&Item> {
        let node = self.locate(index)?;
        // SAFETY: the node lives as long as the shared borrow of the list
        Ok(unsafe { &(*node.as_ptr()).item })
    }

    /// Mutably borrow the value at `index`
    pub fn element_at_mut(&mut self, index: Idx) -> IResult<&mut Item> {
        let node = self.locate(index)?;
        // SAFETY: the node lives as long as the unique borrow of the list
        Ok(unsafe { &mut (*node.as_ptr()).item })
    }

    /// Unlink the node at `index` and hand back its value
    pub fn remove_at(&mut self, index: Idx) -> IResult<Item> {
        let node = self.locate(index)?;
        // SAFETY: `node` came from `locate` and is linked into this list
        Ok(unsafe { self.unlink(node) })
    }

    pub(crate) fn pop_head(&mut self) -> Option<Item> {
        let head = self.head?;
        // SAFETY: `head` is a node of this list
        Some(unsafe { self.unlink(head) })
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Item> {
        let tail = self.tail?;
        // SAFETY: `tail` is a node of this list
        Some(unsafe { self.unlink(tail) })
    }

    pub fn front(&self) -> Option<&Item> {
        // SAFETY: `head` always points at a live node owned by this list
        self.head.map(|node| unsafe { &(*node.as_ptr()).item })
    }

    pub fn back(&self) -> Option<&Item> {
        // SAFETY: `tail` always points at a live node owned by this list
        self.tail.map(|node| unsafe { &(*node.as_ptr()).item })
    }

    pub fn iter(&self) -> Iter<'_, Item> {
        Iter::new(self.head, self.tail, self.size)
    }

    /// Drop every node, leaving an empty list
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        self.tail = None;
        self.size = 0;

        while let Some(node) = curr {
            // SAFETY: each node is reached exactly once through its owning `next` edge
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            curr = node.next;
        }
    }

    /// Find the node at `index`, walking from the end the configured policy picks
    fn locate(&self, index: Idx) -> IResult<NonNull<Node<Item>>> {
        if index >= self.size {
            return Err(self.out_of_range(index))
        }

        let from_head = self.config.locate.from_head(index, self.size);
        log::trace!(
            "locate {} of {} from {}",
            index,
            self.size,
            if from_head { "head" } else { "tail" }
        );

        let mut curr;
        if from_head {
            curr = self.head;
            for _ in 0..index {
                // SAFETY: fewer than `size` steps stay inside the chain
                curr = curr.and_then(|node| unsafe { (*node.as_ptr()).next });
            }
        } else {
            curr = self.tail;
            for _ in index + 1..self.size {
                // SAFETY: fewer than `size` steps stay inside the chain
                curr = curr.and_then(|node| unsafe { (*node.as_ptr()).prev });
            }
        }

        curr.ok_or_else(|| self.out_of_range(index))
    }

    /// Link a fresh node holding `item` right before `at`.
    ///
    /// # Safety
    ///
    /// `at` must be a node of this list.
    unsafe fn splice_before(&mut self, at: NonNull<Node<Item>>, item: Item) {
        let prev = (*at.as_ptr()).prev;
        let node = allocate(Node::new(item, prev, Some(at)));

        match prev {
            Some(prev) => (*prev.as_ptr()).next = Some(node),
            None => self.head = Some(node),
        }
        (*at.as_ptr()).prev = Some(node);

        self.size += 1;
    }

    /// Join the neighbours of `node` together, reclaim it and return its value.
    ///
    /// # Safety
    ///
    /// `node` must be a node of this list.
    unsafe fn unlink(&mut self, node: NonNull<Node<Item>>) -> Item {
        let node = Box::from_raw(node.as_ptr());

        match node.prev {
            Some(prev) => (*prev.as_ptr()).next = node.next,
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => (*next.as_ptr()).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.size -= 1;
        log::trace!("unlink: len {}", self.size);
        node.item
    }

    fn out_of_range(&self, index: Idx) -> Error {
        log::debug!("index {} rejected, len {}", index, self.size);
        Error::IndexOutOfRange { index, len: self.size }
    }

    /// Walk the chain both ways and check every link invariant
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        assert_eq!(self.head.is_none(), self.size == 0, "head/len mismatch");
        assert_eq!(self.tail.is_none(), self.size == 0, "tail/len mismatch");

        let mut forward = 0;
        let mut prev: Link<Item> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            unsafe {
                assert_eq!((*node.as_ptr()).prev, prev, "asymmetric prev-link");
                prev = curr;
                curr = (*node.as_ptr()).next;
            }
            forward += 1;
        }
        assert_eq!(prev, self.tail, "chain does not end at tail");

        let mut backward = 0;
        let mut next: Link<Item> = None;
        let mut curr = self.tail;
        while let Some(node) = curr {
            unsafe {
                assert_eq!((*node.as_ptr()).next, next, "asymmetric next-link");
                next = curr;
                curr = (*node.as_ptr()).prev;
            }
            backward += 1;
        }
        assert_eq!(next, self.head, "chain does not start at head");

        assert_eq!(forward, self.size);
        assert_eq!(backward, self.size);
    }
}

impl<Item, E: Equivalence<Item>> DoublyLinkedList<Item, E> {
    /// Unlink the first node, scanning from head, whose value is equivalent
    /// to `item`. Returns whether anything was removed.
    pub fn remove(&mut self, item: &Item) -> bool {
        match self.find(item) {
            Some(node) => {
                // SAFETY: `find` only yields nodes of this list
                drop(unsafe { self.unlink(node) });
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.find(item).is_some()
    }

    fn find(&self, item: &Item) -> Link<Item> {
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: every node on the `next` chain is live
            let node = unsafe { &*node.as_ptr() };
            if self.eq.equivalent(&node.item, item) {
                return curr
            }
            curr = node.next;
        }
        None
    }
}

impl<Item, E> Drop for DoublyLinkedList<Item, E> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[allow(unsafe_code)]
unsafe impl<Item: Send, E: Send> Send for DoublyLinkedList<Item, E> {}

#[allow(unsafe_code)]
unsafe impl<Item: Sync, E: Sync> Sync for DoublyLinkedList<Item, E> {}

impl<Item: fmt::Debug, E> fmt::Debug for DoublyLinkedList<Item, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<Item: Clone, E: Clone> Clone for DoublyLinkedList<Item, E> {
    fn clone(&self) -> Self {
        let mut list = Self::from_parts(self.config.clone(), self.eq.clone());
        list.extend(self.iter().cloned());
        list
    }
}

impl<Item: PartialEq, E> PartialEq for DoublyLinkedList<Item, E> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<Item: Eq, E> Eq for DoublyLinkedList<Item, E> {}

impl<Item, E> Extend<Item> for DoublyLinkedList<Item, E> {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<Item> FromIterator<Item> for DoublyLinkedList<Item> {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, Item, E> IntoIterator for &'a DoublyLinkedList<Item, E> {
    type Item = &'a Item;
    type IntoIter = Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Item, E> IntoIterator for DoublyLinkedList<Item, E> {
    type Item = Item;
    type IntoIter = IntoIter<Item, E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

/// some common property check
#[allow(dead_code)]
mod compile_time_assertions {
    use super::*;

    #[allow(unreachable_code)]
    fn assert_list_send_sync() {
        _assert_send_sync::<DoublyLinkedList<Vec<u8>>>(unreachable!());
        _assert_send_sync::<DoublyLinkedList<String, fn(&String, &String) -> bool>>(
            unreachable!(),
        );
    }

    fn _assert_send_sync<S: Send + Sync>(_: &S) {}
}
