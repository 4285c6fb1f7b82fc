use thiserror::Error;

/// Returned by [`Snapshot::next_item`][crate::snapshot::Snapshot::next_item] when there is
/// nothing left to hand out. This happens when the snapshot was never reset or when every
/// buffered item has already been taken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no items left in the snapshot, reset it to traverse the tree again")]
pub struct EmptyIteratorError;
