//! [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

mod auction_round;
mod bonus_adjustment;
mod building_unit;
mod case;
mod comparable_property;
mod final_decision;
mod land_parcel;
mod outcome;
mod person;
mod survey;
