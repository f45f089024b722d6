pub mod mheap;
pub mod llpivot;
pub mod stack;

#[cfg(test)]
pub(crate) mod testing;



/// Failure of an operation on a container.
/// The only failure is reading or removing from an empty container;
/// the container is left untouched when this is returned.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("{container} underflow: {op} on empty container")]
    Underflow {
        container: &'static str,
        op: &'static str
    }
}

pub type Result<T> = std::result::Result<T, Error>;
