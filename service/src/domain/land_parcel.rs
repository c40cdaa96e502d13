//! [`LandParcel`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Ping};

use crate::valuation::area::Divisor;

use super::{
    case,
    holding::{Holding, RegistryUrl, Remark},
    macros::{define_id, define_text},
};

/// Land parcel of a [`Case`], as listed in a land registry transcript.
///
/// [`Case`]: super::Case
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LandParcel {
    /// ID of this [`LandParcel`].
    pub id: Id,

    /// ID of the [`Case`] this [`LandParcel`] belongs to.
    ///
    /// [`Case`]: super::Case
    pub case_id: case::Id,

    /// Registry [`Number`] of this [`LandParcel`], if known.
    pub land_number: Option<Number>,

    /// [`RegistryUrl`] of the transcript this [`LandParcel`] is listed in.
    pub registry_url: Option<RegistryUrl>,

    /// [`Holding`] of this [`LandParcel`].
    pub holding: Holding,

    /// Free [`Remark`] about this [`LandParcel`].
    pub remark: Option<Remark>,

    /// Held area of this [`LandParcel`] converted into [`Ping`].
    pub(crate) converted_area: Ping,

    /// [`DateTime`] when this [`LandParcel`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`LandParcel`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

impl LandParcel {
    /// Returns the held area of this [`LandParcel`] converted into [`Ping`].
    #[must_use]
    pub const fn converted_area(&self) -> Ping {
        self.converted_area
    }

    /// Re-derives the converted area of this [`LandParcel`] from its
    /// [`Holding`].
    pub fn recompute(&mut self) {
        self.converted_area = self.holding.converted_area(Divisor::WHOLE);
    }
}

define_id! {
    /// ID of a [`LandParcel`].
    Id
}

define_text! {
    /// Registry number of a [`LandParcel`].
    Number(max = 100)
}

/// [`DateTime`] when a [`LandParcel`] was created.
pub type CreationDateTime = DateTimeOf<(LandParcel, unit::Creation)>;

/// [`DateTime`] when a [`LandParcel`] was modified the last time.
pub type ModificationDateTime = DateTimeOf<(LandParcel, unit::Modification)>;
