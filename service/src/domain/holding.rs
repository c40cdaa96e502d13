//! [`Holding`] and other registry transcript definitions.

use common::{Ping, SquareMeters};

use crate::valuation::area;

use super::macros::define_text;

/// Registered area together with the share of it held by a debtor, as
/// written in a registry transcript.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Holding {
    /// Total registered area.
    pub area: SquareMeters,

    /// Numerator of the held share.
    pub personal_share: Share,

    /// Denominator of the held share.
    pub total_share: Share,
}

/// Part of a share in a [`Holding`].
pub type Share = u64;

impl Holding {
    /// Converts this [`Holding`] into the [`Ping`] area held by a debtor,
    /// divided by the provided `divisor`.
    ///
    /// The result is kept with [`Ping::STORED_SCALE`] decimal places. Invalid
    /// inputs produce a zero area.
    #[must_use]
    pub fn converted_area(&self, divisor: area::Divisor) -> Ping {
        area::convert(
            self.personal_share,
            self.total_share,
            self.area,
            divisor,
        )
        .rounded()
    }
}

define_text! {
    /// Link to a land registry transcript.
    RegistryUrl(max = 1000)
}

define_text! {
    /// Free remark about a registry record.
    Remark(max = 1000)
}
