mod dll;
mod flow;

pub(crate) use self::dll::Link;
pub use self::{
    dll::{DoublyLinkedList, Equivalence, ValueEq},
    flow::{Discipline, HybridFlowProcessor},
};
