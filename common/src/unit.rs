//! Marker types describing lifecycle events of a record.

/// Marker type describing a record creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing the last modification of a record.
#[derive(Clone, Copy, Debug)]
pub struct Modification;
