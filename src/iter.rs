// Iterators over a doubly linked list
use crate::ds::{DoublyLinkedList, Link};
use std::{iter::FusedIterator, marker::PhantomData};

/// A borrowing iterator over the values of a list, head to tail
pub struct Iter<'a, Item> {
    head: Link<Item>,
    tail: Link<Item>,
    // number of values not yet yielded from either end
    len: usize,
    _list: PhantomData<&'a Item>,
}

impl<'a, Item> Iter<'a, Item> {
    pub(crate) fn new(head: Link<Item>, tail: Link<Item>, len: usize) -> Self {
        Self { head, tail, len, _list: PhantomData }
    }

    fn next_inner(&mut self) -> Option<&'a Item> {
        if self.len == 0 {
            return None
        }

        self.head.map(|node| {
            // SAFETY: the list is borrowed for 'a and `len` keeps us inside the chain
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &node.item
        })
    }

    fn next_back_inner(&mut self) -> Option<&'a Item> {
        if self.len == 0 {
            return None
        }

        self.tail.map(|node| {
            // SAFETY: the list is borrowed for 'a and `len` keeps us inside the chain
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &node.item
        })
    }

    fn last_inner(&mut self) -> Option<&'a Item> {
        // the remaining tail is the last value, no walk needed
        let last = self.next_back_inner();
        self.len = 0;
        last
    }
}

impl<'a, Item> Clone for Iter<'a, Item> {
    fn clone(&self) -> Self {
        Self::new(self.head, self.tail, self.len)
    }
}

impl<'a, Item> Iterator for Iter<'a, Item> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_inner()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.last_inner()
    }
}

impl<'a, Item> DoubleEndedIterator for Iter<'a, Item> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next_back_inner()
    }
}

impl<'a, Item> ExactSizeIterator for Iter<'a, Item> {}

impl<'a, Item> FusedIterator for Iter<'a, Item> {}

/// An owning iterator that unlinks values from the list as it goes
pub struct IntoIter<Item, E> {
    list: DoublyLinkedList<Item, E>,
}

impl<Item, E> IntoIter<Item, E> {
    pub(crate) fn new(list: DoublyLinkedList<Item, E>) -> Self {
        Self { list }
    }
}

impl<Item, E> Iterator for IntoIter<Item, E> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        self.list.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<Item, E> DoubleEndedIterator for IntoIter<Item, E> {
    fn next_back(&mut self) -> Option<Item> {
        self.list.pop_tail()
    }
}

impl<Item, E> ExactSizeIterator for IntoIter<Item, E> {}

impl<Item, E> FusedIterator for IntoIter<Item, E> {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::rc::Rc;

    #[test]
    fn test_iter_both_ends() {
        let list: DoublyLinkedList<i32> = (1..=5).collect();
        let mut iter = list.iter();

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&3));

        // the two ends met, nothing is yielded twice
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_rev_and_last() {
        let list: DoublyLinkedList<char> = "linked".chars().collect();

        assert_eq!(list.iter().rev().collect::<String>(), "deknil");
        assert_eq!(list.iter().last(), Some(&'d'));

        let mut iter = list.iter();
        iter.next_back();
        assert_eq!(iter.last(), Some(&'e'));
    }

    #[test]
    fn test_iter_empty() {
        let list: DoublyLinkedList<u8> = DoublyLinkedList::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().next_back(), None);
        assert_eq!(list.iter().last(), None);
        assert_eq!(list.iter().len(), 0);
    }

    #[test]
    fn test_iter_is_restartable() {
        let list: DoublyLinkedList<i32> = (0..4).collect();
        let iter = list.iter();
        let again = iter.clone();

        assert_eq!(iter.sum::<i32>(), 6);
        assert_eq!(again.copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_into_iter_drains_from_both_ends() {
        let list: DoublyLinkedList<i32> = (0..6).collect();
        let mut iter = list.into_iter();

        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_into_iter_drop_reclaims_rest() {
        let marker = Rc::new(());
        let list: DoublyLinkedList<Rc<()>> = (0..5).map(|_| Rc::clone(&marker)).collect();

        let mut iter = list.into_iter();
        let first = iter.next();
        assert_eq!(Rc::strong_count(&marker), 6);

        drop(iter);
        assert_eq!(Rc::strong_count(&marker), 2);
        drop(first);
        assert_eq!(Rc::strong_count(&marker), 1);
    }
}
