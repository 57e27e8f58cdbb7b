/// A stack and a queue sharing one chain
use crate::{iter::Iter, prelude::*};
use std::fmt;

/// Which side of the processor a call came through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    Stack,
    Queue,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Stack => f.write_str("stack"),
            Discipline::Queue => f.write_str("queue"),
        }
    }
}

/// Stack and queue operations over the two ends of a single list.
///
/// `push` inserts at the tail and `enqueue` at the head, while both `pop`
/// and `dequeue` take from the tail. Used alone, `push`/`pop` is LIFO and
/// `enqueue`/`dequeue` is FIFO. Mixing the two insertion ends on one
/// instance yields the single shared ordering of the underlying chain:
///
/// ```
/// use hybrid_flow::HybridFlowProcessor;
///
/// let mut flow = HybridFlowProcessor::new();
/// flow.push(1);
/// flow.enqueue(2);
/// flow.push(3);
///
/// // chain is now [2, 1, 3]
/// assert_eq!(flow.dequeue(), Ok(3));
/// assert_eq!(flow.pop(), Ok(1));
/// assert_eq!(flow.dequeue(), Ok(2));
/// ```
#[derive(Debug)]
pub struct HybridFlowProcessor<T> {
    storage: DoublyLinkedList<T>,
}

impl<T> Default for HybridFlowProcessor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HybridFlowProcessor<T> {
    pub fn new() -> Self {
        // the nearest locator keeps `remove_at(len - 1)` a zero step walk
        Self { storage: DoublyLinkedList::with_config(Config::new(Locate::Nearest)) }
    }

    pub fn push(&mut self, item: T) {
        self.storage.append(item);
    }

    pub fn pop(&mut self) -> IResult<T> {
        self.take_tail(Discipline::Stack)
    }

    pub fn enqueue(&mut self, item: T) {
        self.storage.prepend(item);
    }

    pub fn dequeue(&mut self) -> IResult<T> {
        self.take_tail(Discipline::Queue)
    }

    /// The value the next `pop` or `dequeue` would return
    pub fn peek(&self) -> Option<&T> {
        self.storage.back()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Values in chain order, head first
    pub fn iter(&self) -> Iter<'_, T> {
        self.storage.iter()
    }

    fn take_tail(&mut self, discipline: Discipline) -> IResult<T> {
        if self.storage.is_empty() {
            log::debug!("{} is empty", discipline);
            return Err(Error::EmptyCollection(discipline))
        }

        let last = self.storage.len() - 1;
        self.storage.remove_at(last)
    }
}
