pub mod prelude {
    pub use super::Error;

    pub use super::{
        config::{Config, Locate},
        ds::{Discipline, DoublyLinkedList, Equivalence, HybridFlowProcessor, ValueEq},
    };

    pub type Idx = usize;
    pub type IResult<T> = Result<T, Error>;
}

mod sync {
    pub use std::sync::Arc;
}

mod config;
mod ds;
pub mod iter;

pub use config::{Config, ConfigInner, Locate};
pub use ds::{Discipline, DoublyLinkedList, Equivalence, HybridFlowProcessor, ValueEq};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An indexed access or insertion fell outside the valid range
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A removal was requested from an empty processor
    #[error("{0} is empty")]
    EmptyCollection(Discipline),
}
