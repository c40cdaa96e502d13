//! [`ComparableProperty`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, Date, DateTimeOf, Money, Ping, Rate};
use rust_decimal::Decimal;
use tracing as log;

use crate::valuation::{bonus, unit_price};

use super::{
    case,
    macros::{define_id, define_text},
};

/// Property recently sold or listed nearby, used to estimate the market
/// value of a [`Case`].
///
/// [`Case`]: super::Case
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparableProperty {
    /// ID of this [`ComparableProperty`].
    pub id: Id,

    /// ID of the [`Case`] this [`ComparableProperty`] is compared with.
    ///
    /// [`Case`]: super::Case
    pub case_id: case::Id,

    /// [`Kind`] of this [`ComparableProperty`].
    pub kind: Kind,

    /// [`Address`] of this [`ComparableProperty`], if known.
    pub address: Option<Address>,

    /// [`AttachmentUrl`] of this [`ComparableProperty`] source, if any.
    pub attachment_url: Option<AttachmentUrl>,

    /// Age of this [`ComparableProperty`] in years.
    pub house_age: Decimal,

    /// [`Date`] when this [`ComparableProperty`] was sold, if known.
    pub transaction_date: Option<Date>,

    /// [`FloorHeight`] of this [`ComparableProperty`], if known.
    pub floor_height: Option<FloorHeight>,

    /// Total price of this [`ComparableProperty`].
    pub total_price: Money,

    /// Main build area of this [`ComparableProperty`].
    pub build_area: Ping,

    /// Additional build area of this [`ComparableProperty`], counted as a
    /// half.
    pub sub_build_area: Ping,

    /// Price of a single [`Ping`] of this [`ComparableProperty`].
    pub(crate) unit_price: Money,

    /// Unit price of this [`ComparableProperty`] adjusted by its bonuses.
    pub(crate) adjusted_value: Money,

    /// [`DateTime`] when this [`ComparableProperty`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`ComparableProperty`] was modified the last
    /// time.
    pub updated_at: ModificationDateTime,
}

impl ComparableProperty {
    /// Returns the price of a single [`Ping`] of this [`ComparableProperty`].
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the unit price of this [`ComparableProperty`] adjusted by its
    /// bonuses.
    #[must_use]
    pub const fn adjusted_value(&self) -> Money {
        self.adjusted_value
    }

    /// Re-derives the unit price of this [`ComparableProperty`] from its
    /// prices and areas, and then its adjusted value from the provided bonus
    /// `rates`.
    pub fn recompute(&mut self, rates: &[Rate]) {
        self.unit_price = unit_price::calculate(
            self.total_price,
            self.build_area,
            self.sub_build_area,
        );
        _ = self.apply_bonus_rates(rates);
    }

    /// Re-derives the adjusted value of this [`ComparableProperty`] from the
    /// provided bonus `rates`.
    ///
    /// Returns `true` if the adjusted value has changed.
    pub fn apply_bonus_rates(&mut self, rates: &[Rate]) -> bool {
        let value = bonus::adjusted_value(rates, self.unit_price);
        if value == self.adjusted_value {
            return false;
        }

        log::debug!(
            "`ComparableProperty(id: {})` adjusted value: {} -> {value}",
            self.id,
            self.adjusted_value,
        );
        self.adjusted_value = value;
        true
    }
}

define_id! {
    /// ID of a [`ComparableProperty`].
    Id
}

define_kind! {
    #[doc = "Source of a [`ComparableProperty`]."]
    enum Kind {
        #[doc = "Entered manually (自訂)."]
        Custom = 1,

        #[doc = "Taken from the actual price registry (實價登錄)."]
        PriceRegistry = 2,

        #[doc = "Taken from a market listing (好時價)."]
        MarketListing = 3,
    }
}

impl Default for Kind {
    fn default() -> Self {
        Self::Custom
    }
}

define_text! {
    /// Address of a [`ComparableProperty`].
    Address(max = 100)
}

define_text! {
    /// Link to the source of a [`ComparableProperty`].
    AttachmentUrl(max = 1000)
}

define_text! {
    /// Floor and height of a [`ComparableProperty`], like `3/12`.
    FloorHeight(max = 100)
}

/// [`DateTime`] when a [`ComparableProperty`] was created.
pub type CreationDateTime = DateTimeOf<(ComparableProperty, unit::Creation)>;

/// [`DateTime`] when a [`ComparableProperty`] was modified the last time.
pub type ModificationDateTime =
    DateTimeOf<(ComparableProperty, unit::Modification)>;

#[cfg(test)]
mod spec {
    use common::{DateTime, Money, Ping, Rate};
    use rust_decimal::Decimal;

    use crate::domain::case;

    use super::{ComparableProperty, Id, Kind};

    fn money(s: &str) -> Money {
        Money::new(s.parse().unwrap())
    }

    fn rate(s: &str) -> Rate {
        s.parse().unwrap()
    }

    fn comparable(total: &str, build: &str, sub: &str) -> ComparableProperty {
        let now = DateTime::now();
        ComparableProperty {
            id: Id::new(),
            case_id: case::Id::new(),
            kind: Kind::default(),
            address: None,
            attachment_url: None,
            house_age: Decimal::ZERO,
            transaction_date: None,
            floor_height: None,
            total_price: money(total),
            build_area: Ping::new(build.parse().unwrap()),
            sub_build_area: Ping::new(sub.parse().unwrap()),
            unit_price: Money::ZERO,
            adjusted_value: Money::ZERO,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        }
    }

    #[test]
    fn recomputes_unit_price_and_adjusted_value() {
        let mut comparable = comparable("1000000", "30", "0");

        comparable.recompute(&[rate("0.1")]);

        assert_eq!(comparable.unit_price(), money("33333"));
        assert_eq!(comparable.adjusted_value(), money("36666"));
    }

    #[test]
    fn adjusted_value_equals_unit_price_without_bonuses() {
        let mut comparable = comparable("12000000", "30", "20");

        comparable.recompute(&[]);

        assert_eq!(comparable.unit_price(), money("300000"));
        assert_eq!(comparable.adjusted_value(), money("300000"));
    }

    #[test]
    fn reports_whether_bonus_rates_changed_value() {
        let mut comparable = comparable("1000000", "10", "0");
        comparable.recompute(&[]);

        assert!(comparable.apply_bonus_rates(&[rate("0.05")]));
        assert!(!comparable.apply_bonus_rates(&[rate("0.05")]));
        assert_eq!(comparable.adjusted_value(), money("105000"));

        assert!(comparable.apply_bonus_rates(&[]));
        assert_eq!(comparable.adjusted_value(), money("100000"));
    }

    #[test]
    fn zero_area_gives_zero_values() {
        let mut comparable = comparable("1000000", "0", "0");

        comparable.recompute(&[rate("0.2")]);

        assert_eq!(comparable.unit_price(), Money::ZERO);
        assert_eq!(comparable.adjusted_value(), Money::ZERO);
    }
}
