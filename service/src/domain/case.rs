//! [`Case`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};

use super::{
    macros::{define_id, define_text},
    user,
};

/// Foreclosure case, the root every valuation record belongs to.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Case {
    /// ID of this [`Case`].
    pub id: Id,

    /// [`Number`] of this [`Case`].
    pub number: Number,

    /// [`Company`] handling this [`Case`], if any.
    pub company: Option<Company>,

    /// [`Status`] of this [`Case`], if known.
    pub status: Option<Status>,

    /// ID of the [`user`] owning this [`Case`].
    pub owner_id: user::Id,

    /// [`Address`] of the property under foreclosure.
    pub address: Address,

    /// [`DateTime`] when this [`Case`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Case`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

define_id! {
    /// ID of a [`Case`].
    Id
}

define_text! {
    /// Number of a [`Case`] assigned by the court.
    Number(max = 100)
}

define_text! {
    /// Company handling a [`Case`].
    Company(max = 100)
}

define_kind! {
    #[doc = "Status of a [`Case`]."]
    enum Status {
        #[doc = "[`Case`] is being worked on."]
        InProgress = 1,

        #[doc = "[`Case`] is closed."]
        Closed = 2,
    }
}

define_text! {
    /// Single part of an [`Address`].
    AddressPart(max = 100)
}

/// Address of a property under foreclosure, split into the parts used by
/// land registry offices.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Address {
    /// City (縣市).
    pub city: Option<AddressPart>,

    /// Township (鄉鎮區).
    pub township: Option<AddressPart>,

    /// Land section (段) of the registry.
    pub big_section: Option<AddressPart>,

    /// Land subsection (小段) of the registry.
    pub small_section: Option<AddressPart>,

    /// Village (村里).
    pub village: Option<AddressPart>,

    /// Neighborhood (鄰).
    pub neighbor: Option<AddressPart>,

    /// Street or road (街路).
    pub street: Option<AddressPart>,

    /// Street section (段).
    pub section: Option<AddressPart>,

    /// Lane (巷).
    pub lane: Option<AddressPart>,

    /// Alley (弄).
    pub alley: Option<AddressPart>,

    /// Number plate (號).
    pub number_plate: Option<AddressPart>,

    /// Floor (樓).
    pub floor: Option<AddressPart>,
}

impl Address {
    /// Returns the full postal form of this [`Address`].
    ///
    /// Registry sections are not a part of a postal address, so they're
    /// omitted.
    #[must_use]
    pub fn full(&self) -> String {
        [
            &self.city,
            &self.township,
            &self.village,
            &self.neighbor,
            &self.street,
            &self.section,
            &self.lane,
            &self.alley,
            &self.number_plate,
            &self.floor,
        ]
        .into_iter()
        .flatten()
        .map(AsRef::<str>::as_ref)
        .collect()
    }
}

/// [`DateTime`] when a [`Case`] was created.
pub type CreationDateTime = DateTimeOf<(Case, unit::Creation)>;

/// [`DateTime`] when a [`Case`] was modified the last time.
pub type ModificationDateTime = DateTimeOf<(Case, unit::Modification)>;
