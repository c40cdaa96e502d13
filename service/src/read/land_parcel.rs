//! [`LandParcel`]-related read definitions.

use common::Ping;
use derive_more::{Deref, From, Into};

#[cfg(doc)]
use crate::domain::{Case, LandParcel};

/// Converted areas of all the [`LandParcel`]s of a [`Case`].
#[derive(Clone, Debug, Default, Deref, Eq, From, Into, PartialEq)]
pub struct ConvertedAreas(pub Vec<Ping>);
