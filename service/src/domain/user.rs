//! User definitions.
//!
//! Users themselves are managed outside of the valuation core, so only their
//! IDs are referenced here.

use super::macros::define_id;

define_id! {
    /// ID of a back office user owning [`Case`]s or inspecting
    /// [`ComparableProperty`]s.
    ///
    /// [`Case`]: crate::domain::Case
    /// [`ComparableProperty`]: crate::domain::ComparableProperty
    Id
}
