//! [`AuctionRound`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, Date, DateTimeOf, Money, Ping};
use rust_decimal::Decimal;
use tracing as log;

use crate::valuation::auction;

use super::{case, macros::define_id};

/// Court auction round of a [`Case`].
///
/// [`Case`]: super::Case
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AuctionRound {
    /// ID of this [`AuctionRound`].
    pub id: Id,

    /// ID of the [`Case`] this [`AuctionRound`] belongs to.
    ///
    /// [`Case`]: super::Case
    pub case_id: case::Id,

    /// [`Round`] of this [`AuctionRound`].
    pub round: Round,

    /// [`Date`] of this [`AuctionRound`], if scheduled.
    pub auction_date: Option<Date>,

    /// Floor price the property is auctioned for.
    pub floor_price: Money,

    /// Number of listing views, if tracked.
    pub clicks: Option<Count>,

    /// Number of listing watchers, if tracked.
    pub monitors: Option<Count>,

    /// Number of similar cases auctioned nearby, if tracked.
    pub case_count: Option<Count>,

    /// Security deposit required to bid, if known.
    pub margin: Option<Money>,

    /// Floor price of a single [`Ping`] of the [`Case`] buildings.
    ///
    /// [`Case`]: super::Case
    pub(crate) unit_floor_price: Money,

    /// Ratio of the mean comparable value to the unit floor price.
    pub(crate) cost_performance: Decimal,

    /// [`DateTime`] when this [`AuctionRound`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`AuctionRound`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

impl AuctionRound {
    /// Returns the floor price of a single [`Ping`] of the [`Case`]
    /// buildings.
    ///
    /// [`Case`]: super::Case
    #[must_use]
    pub const fn unit_floor_price(&self) -> Money {
        self.unit_floor_price
    }

    /// Returns the ratio of the mean comparable value to the unit floor
    /// price.
    #[must_use]
    pub const fn cost_performance(&self) -> Decimal {
        self.cost_performance
    }

    /// Re-derives the figures of this [`AuctionRound`] from the converted
    /// `building_areas` and the `adjusted_values` of comparable properties
    /// of its [`Case`].
    ///
    /// Returns `true` if any of the figures has changed.
    ///
    /// [`Case`]: super::Case
    pub fn apply_aggregates(
        &mut self,
        building_areas: &[Ping],
        adjusted_values: &[Money],
    ) -> bool {
        let unit_floor_price =
            auction::unit_floor_price(self.floor_price, building_areas);
        let cost_performance =
            auction::cost_performance(adjusted_values, unit_floor_price);
        if unit_floor_price == self.unit_floor_price
            && cost_performance == self.cost_performance
        {
            return false;
        }

        log::debug!(
            "`AuctionRound(id: {})` unit floor price: {} -> \
             {unit_floor_price}, cost performance: {} -> {cost_performance}",
            self.id,
            self.unit_floor_price,
            self.cost_performance,
        );
        self.unit_floor_price = unit_floor_price;
        self.cost_performance = cost_performance;
        true
    }
}

define_id! {
    /// ID of an [`AuctionRound`].
    Id
}

define_kind! {
    #[doc = "Ordinal of an [`AuctionRound`]."]
    enum Round {
        #[doc = "First auction (1拍)."]
        First = 1,

        #[doc = "Second auction (2拍), with the floor price lowered."]
        Second = 2,

        #[doc = "Third auction (3拍), with the floor price lowered again."]
        Third = 3,

        #[doc = "Fourth auction (4拍), a special sale at the last price."]
        Fourth = 4,
    }
}

/// Counter of listing statistics.
pub type Count = u32;

/// [`DateTime`] when an [`AuctionRound`] was created.
pub type CreationDateTime = DateTimeOf<(AuctionRound, unit::Creation)>;

/// [`DateTime`] when an [`AuctionRound`] was modified the last time.
pub type ModificationDateTime =
    DateTimeOf<(AuctionRound, unit::Modification)>;

#[cfg(test)]
mod spec {
    use common::{DateTime, Money, Ping};
    use rust_decimal::Decimal;

    use crate::domain::case;

    use super::{AuctionRound, Id, Round};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn round(floor_price: &str) -> AuctionRound {
        let now = DateTime::now();
        AuctionRound {
            id: Id::new(),
            case_id: case::Id::new(),
            round: Round::First,
            auction_date: None,
            floor_price: Money::new(decimal(floor_price)),
            clicks: None,
            monitors: None,
            case_count: None,
            margin: None,
            unit_floor_price: Money::ZERO,
            cost_performance: Decimal::ZERO,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        }
    }

    #[test]
    fn applies_case_aggregates() {
        let mut round = round("3000000");

        assert!(round.apply_aggregates(
            &[Ping::new(decimal("30"))],
            &[Money::new(decimal("120000"))],
        ));
        assert_eq!(round.unit_floor_price(), Money::new(decimal("100000")));
        assert_eq!(round.cost_performance(), decimal("1.20"));
    }

    #[test]
    fn reports_unchanged_aggregates() {
        let mut round = round("3000000");
        let areas = [Ping::new(decimal("30"))];
        let values = [Money::new(decimal("120000"))];

        assert!(round.apply_aggregates(&areas, &values));
        assert!(!round.apply_aggregates(&areas, &values));
    }

    #[test]
    fn no_buildings_give_zero_figures() {
        let mut round = round("3000000");

        assert!(!round.apply_aggregates(&[], &[Money::new(decimal("1"))]));
        assert_eq!(round.unit_floor_price(), Money::ZERO);
        assert_eq!(round.cost_performance(), Decimal::ZERO);
    }

    #[test]
    fn round_uses_kebab_case() {
        assert_eq!(Round::Fourth.to_string(), "fourth");
        assert_eq!("second".parse::<Round>().unwrap(), Round::Second);
    }
}
