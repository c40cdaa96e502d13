//! [`BonusAdjustment`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Rate};

use super::{
    comparable_property,
    macros::{define_id, define_text},
    user,
};

/// Adjustment of a [`ComparableProperty`] value for differences with the
/// property under foreclosure.
///
/// [`ComparableProperty`]: super::ComparableProperty
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BonusAdjustment {
    /// ID of this [`BonusAdjustment`].
    pub id: Id,

    /// ID of the [`ComparableProperty`] this [`BonusAdjustment`] applies to.
    ///
    /// [`ComparableProperty`]: super::ComparableProperty
    pub comparable_id: comparable_property::Id,

    /// ID of the [`user`] who inspected the difference, if known.
    pub inspector_id: Option<user::Id>,

    /// [`Rate`] of this [`BonusAdjustment`].
    pub rate: Rate,

    /// [`Reason`] of this [`BonusAdjustment`], if any.
    pub reason: Option<Reason>,

    /// [`DateTime`] when this [`BonusAdjustment`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`BonusAdjustment`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

define_id! {
    /// ID of a [`BonusAdjustment`].
    Id
}

define_text! {
    /// Reason of a [`BonusAdjustment`].
    Reason(max = 100)
}

/// [`DateTime`] when a [`BonusAdjustment`] was created.
pub type CreationDateTime = DateTimeOf<(BonusAdjustment, unit::Creation)>;

/// [`DateTime`] when a [`BonusAdjustment`] was modified the last time.
pub type ModificationDateTime =
    DateTimeOf<(BonusAdjustment, unit::Modification)>;
