//! Read entities definitions.

pub mod bonus_adjustment;
pub mod building_unit;
pub mod comparable_property;
pub mod land_parcel;
