//! [`Survey`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};

use super::{
    case,
    macros::{define_id, define_text},
};

/// Field survey of the property under foreclosure in a [`Case`].
///
/// [`Case`]: super::Case
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Survey {
    /// ID of this [`Survey`].
    pub id: Id,

    /// ID of the [`Case`] this [`Survey`] belongs to.
    ///
    /// [`Case`]: super::Case
    pub case_id: case::Id,

    /// Notes of the first survey [`Day`], if it took place.
    pub first_day: Option<Day>,

    /// Notes of the second survey [`Day`], if it took place.
    pub second_day: Option<Day>,

    /// [`Links`] to the documents gathered during this [`Survey`].
    pub links: Links,

    /// [`DateTime`] when this [`Survey`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Survey`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

define_id! {
    /// ID of a [`Survey`].
    Id
}

define_text! {
    /// Notes of a single day spent on a [`Survey`].
    Day(max = 100)
}

define_text! {
    /// Link to a document gathered during a [`Survey`].
    Link(max = 1000)
}

/// [`Link`]s to the documents gathered during a [`Survey`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Links {
    /// Court foreclosure announcement (法拍公告).
    pub announcement: Option<Link>,

    /// Listing on a property portal.
    pub listing: Option<Link>,

    /// Photos of the property.
    pub photos: Option<Link>,

    /// Market prices of the neighbourhood.
    pub market_price: Option<Link>,

    /// Auction records of the property.
    pub auction_record: Option<Link>,

    /// Notes of the on-site inspection.
    pub site_inspection: Option<Link>,

    /// Correspondence register (收發文簿).
    pub correspondence: Option<Link>,

    /// Expense ledger (流水帳).
    pub ledger: Option<Link>,
}

impl Links {
    /// Counts the [`Link`]s present.
    #[must_use]
    pub fn count(&self) -> usize {
        [
            &self.announcement,
            &self.listing,
            &self.photos,
            &self.market_price,
            &self.auction_record,
            &self.site_inspection,
            &self.correspondence,
            &self.ledger,
        ]
        .into_iter()
        .filter(|l| l.is_some())
        .count()
    }
}

/// [`DateTime`] when a [`Survey`] was created.
pub type CreationDateTime = DateTimeOf<(Survey, unit::Creation)>;

/// [`DateTime`] when a [`Survey`] was modified the last time.
pub type ModificationDateTime = DateTimeOf<(Survey, unit::Modification)>;

#[cfg(test)]
mod spec {
    use super::{Link, Links};

    #[test]
    fn counts_present_links() {
        assert_eq!(Links::default().count(), 0);

        let links = Links {
            announcement: Link::new("https://aomp109.judicial.gov.tw/1"),
            photos: Link::new("https://photos.example.com/113-1234"),
            ledger: Link::new("  "),
            ..Links::default()
        };

        assert_eq!(links.count(), 2);
    }

    #[test]
    fn rejects_overlong_link() {
        let long = format!("https://example.com/{}", "a".repeat(Link::MAX_LEN));

        assert!(Link::new(long).is_none());
    }
}
