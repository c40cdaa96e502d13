//! [`BuildingUnit`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Ping};

use crate::valuation::area::Divisor;

use super::{
    case,
    holding::{Holding, RegistryUrl, Remark},
    macros::{define_id, define_text},
};

/// Building unit of a [`Case`], as listed in a building registry transcript.
///
/// [`Case`]: super::Case
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildingUnit {
    /// ID of this [`BuildingUnit`].
    pub id: Id,

    /// ID of the [`Case`] this [`BuildingUnit`] belongs to.
    ///
    /// [`Case`]: super::Case
    pub case_id: case::Id,

    /// Registry [`Number`] of this [`BuildingUnit`], if known.
    pub build_number: Option<Number>,

    /// [`RegistryUrl`] of the transcript this [`BuildingUnit`] is listed in.
    pub registry_url: Option<RegistryUrl>,

    /// [`Holding`] of this [`BuildingUnit`].
    pub holding: Holding,

    /// [`Usage`] of this [`BuildingUnit`].
    pub usage: Usage,

    /// Zoning of this [`BuildingUnit`], if known.
    pub use_partition: Option<UsePartition>,

    /// Free [`Remark`] about this [`BuildingUnit`].
    pub remark: Option<Remark>,

    /// Held area of this [`BuildingUnit`] converted into [`Ping`] and
    /// adjusted by its [`Usage`].
    pub(crate) converted_area: Ping,

    /// [`DateTime`] when this [`BuildingUnit`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`BuildingUnit`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

impl BuildingUnit {
    /// Returns the held area of this [`BuildingUnit`] converted into
    /// [`Ping`].
    #[must_use]
    pub const fn converted_area(&self) -> Ping {
        self.converted_area
    }

    /// Re-derives the converted area of this [`BuildingUnit`] from its
    /// [`Holding`] and [`Usage`].
    pub fn recompute(&mut self) {
        self.converted_area = self.holding.converted_area(self.usage.divisor());
    }
}

define_id! {
    /// ID of a [`BuildingUnit`].
    Id
}

define_text! {
    /// Registry number of a [`BuildingUnit`].
    Number(max = 100)
}

define_text! {
    /// Zoning of a [`BuildingUnit`].
    UsePartition(max = 100)
}

define_kind! {
    #[doc = "Usage of a [`BuildingUnit`]."]
    enum Usage {
        #[doc = "Usage is not specified."]
        None = 0,

        #[doc = "Common facilities (公設) shared by all the owners."]
        CommonFacility = 1,

        #[doc = "Walk-up apartment (公寓) without an elevator."]
        WalkUpApartment = 2,

        #[doc = "Townhouse (透天厝)."]
        Townhouse = 3,

        #[doc = "Storefront (店面)."]
        Storefront = 4,

        #[doc = "Office or commercial building (辦公商業大樓)."]
        OfficeBuilding = 5,

        #[doc = "Residential tower (住宅大樓)."]
        ResidentialTower = 6,

        #[doc = "Mid-rise building (華廈)."]
        MidRise = 7,

        #[doc = "Studio (套房)."]
        Studio = 8,

        #[doc = "Farmhouse (農舍)."]
        Farmhouse = 9,

        #[doc = "Addition (增建) counted by a half of its held share."]
        AdditionHalfShare = 10,
    }
}

impl Default for Usage {
    fn default() -> Self {
        Self::None
    }
}

impl Usage {
    /// Returns the [`Divisor`] applied to the converted area of a
    /// [`BuildingUnit`] with this [`Usage`].
    #[must_use]
    pub const fn divisor(self) -> Divisor {
        match self {
            Self::AdditionHalfShare => Divisor::HALF,
            Self::CommonFacility => Divisor::QUARTER,
            Self::None
            | Self::WalkUpApartment
            | Self::Townhouse
            | Self::Storefront
            | Self::OfficeBuilding
            | Self::ResidentialTower
            | Self::MidRise
            | Self::Studio
            | Self::Farmhouse => Divisor::WHOLE,
        }
    }
}

/// [`DateTime`] when a [`BuildingUnit`] was created.
pub type CreationDateTime = DateTimeOf<(BuildingUnit, unit::Creation)>;

/// [`DateTime`] when a [`BuildingUnit`] was modified the last time.
pub type ModificationDateTime =
    DateTimeOf<(BuildingUnit, unit::Modification)>;
