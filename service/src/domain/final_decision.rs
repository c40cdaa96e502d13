//! [`FinalDecision`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, Date, DateTimeOf};

use super::{
    case,
    macros::{define_id, define_text},
};

/// Final bid decision made on a [`Case`] after its valuation.
///
/// [`Case`]: super::Case
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FinalDecision {
    /// ID of this [`FinalDecision`].
    pub id: Id,

    /// ID of the [`Case`] this [`FinalDecision`] is made on.
    ///
    /// [`Case`]: super::Case
    pub case_id: case::Id,

    /// [`Verdict`] itself, if made.
    pub verdict: Option<Verdict>,

    /// [`Category`] of this [`FinalDecision`], if any.
    pub category: Option<Category>,

    /// [`Remark`] about this [`FinalDecision`], if any.
    pub remark: Option<Remark>,

    /// [`DecisionMaker`] who signed off this [`FinalDecision`], if known.
    pub decision_maker: Option<DecisionMaker>,

    /// [`Date`] this [`FinalDecision`] was made on, if known.
    pub date: Option<Date>,

    /// [`WorkArea`] this [`FinalDecision`] was made in, if known.
    pub work_area: Option<WorkArea>,

    /// [`DateTime`] when this [`FinalDecision`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`FinalDecision`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

define_id! {
    /// ID of a [`FinalDecision`].
    Id
}

define_text! {
    /// Short verdict of a [`FinalDecision`], like `投` or `不投`.
    Verdict(max = 10)
}

define_text! {
    /// Category of a [`FinalDecision`].
    Category(max = 3000)
}

define_text! {
    /// Remark about a [`FinalDecision`].
    Remark(max = 3000)
}

define_text! {
    /// Name of the person signing off a [`FinalDecision`].
    DecisionMaker(max = 10)
}

define_text! {
    /// Work area a [`FinalDecision`] is made in.
    WorkArea(max = 10)
}

/// [`DateTime`] when a [`FinalDecision`] was created.
pub type CreationDateTime = DateTimeOf<(FinalDecision, unit::Creation)>;

/// [`DateTime`] when a [`FinalDecision`] was modified the last time.
pub type ModificationDateTime =
    DateTimeOf<(FinalDecision, unit::Modification)>;
