//! [`Command`] definition.

pub mod create_auction_round;
pub mod create_bonus_adjustment;
pub mod create_building_unit;
pub mod create_case;
pub mod create_comparable_property;
pub mod create_final_decision;
pub mod create_land_parcel;
pub mod create_outcome;
pub mod create_person;
pub mod create_survey;
pub mod delete_auction_round;
pub mod delete_bonus_adjustment;
pub mod delete_building_unit;
pub mod delete_case;
pub mod delete_comparable_property;
pub mod delete_final_decision;
pub mod delete_land_parcel;
pub mod delete_outcome;
pub mod delete_person;
pub mod delete_survey;
pub mod recompute_auction_round;
pub mod recompute_case;
pub mod recompute_comparable_property;
pub mod update_auction_round;
pub mod update_bonus_adjustment;
pub mod update_building_unit;
pub mod update_case;
pub mod update_comparable_property;
pub mod update_final_decision;
pub mod update_land_parcel;
pub mod update_outcome;
pub mod update_person;
pub mod update_survey;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_auction_round::CreateAuctionRound,
    create_bonus_adjustment::CreateBonusAdjustment,
    create_building_unit::CreateBuildingUnit, create_case::CreateCase,
    create_comparable_property::CreateComparableProperty,
    create_final_decision::CreateFinalDecision,
    create_land_parcel::CreateLandParcel, create_outcome::CreateOutcome,
    create_person::CreatePerson, create_survey::CreateSurvey,
    delete_auction_round::DeleteAuctionRound,
    delete_bonus_adjustment::DeleteBonusAdjustment,
    delete_building_unit::DeleteBuildingUnit, delete_case::DeleteCase,
    delete_comparable_property::DeleteComparableProperty,
    delete_final_decision::DeleteFinalDecision,
    delete_land_parcel::DeleteLandParcel, delete_outcome::DeleteOutcome,
    delete_person::DeletePerson, delete_survey::DeleteSurvey,
    recompute_auction_round::RecomputeAuctionRound,
    recompute_case::RecomputeCase,
    recompute_comparable_property::RecomputeComparableProperty,
    update_auction_round::UpdateAuctionRound,
    update_bonus_adjustment::UpdateBonusAdjustment,
    update_building_unit::UpdateBuildingUnit, update_case::UpdateCase,
    update_comparable_property::UpdateComparableProperty,
    update_final_decision::UpdateFinalDecision,
    update_land_parcel::UpdateLandParcel, update_outcome::UpdateOutcome,
    update_person::UpdatePerson, update_survey::UpdateSurvey,
};

/// Outcome of re-deriving the figures of a record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Recomputed<T> {
    /// Figures have changed and the record was written.
    Updated(T),

    /// Figures are the same, so nothing was written.
    Unchanged(T),
}

impl<T> Recomputed<T> {
    /// Indicates whether the record was written.
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// Returns the recomputed record.
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Self::Updated(v) | Self::Unchanged(v) => v,
        }
    }
}
