//! Domain definitions.

mod macros;

pub mod auction_round;
pub mod bonus_adjustment;
pub mod building_unit;
pub mod case;
pub mod comparable_property;
pub mod final_decision;
pub mod holding;
pub mod land_parcel;
pub mod outcome;
pub mod person;
pub mod survey;
pub mod user;

pub use self::{
    auction_round::AuctionRound, bonus_adjustment::BonusAdjustment,
    building_unit::BuildingUnit, case::Case,
    comparable_property::ComparableProperty,
    final_decision::FinalDecision, holding::Holding,
    land_parcel::LandParcel, outcome::Outcome, person::Person,
    survey::Survey,
};
