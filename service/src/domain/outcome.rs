//! [`Outcome`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, Date, DateTimeOf, Money};

use super::{
    auction_round, case,
    macros::{define_id, define_text},
};

/// Outcome of bidding on a [`Case`].
///
/// [`Case`]: super::Case
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outcome {
    /// ID of this [`Outcome`].
    pub id: Id,

    /// ID of the [`Case`] this [`Outcome`] is of.
    ///
    /// [`Case`]: super::Case
    pub case_id: case::Id,

    /// [`Date`] the purchase was stopped on, if it was.
    pub stop_buy_date: Option<Date>,

    /// [`Action`] the bid ended with, if known.
    pub action: Option<Action>,

    /// [`auction_round::Round`] the bid was placed in, if any.
    pub bid_round: Option<auction_round::Round>,

    /// Amount of the placed bid, if any.
    pub bid_money: Option<Money>,

    /// [`ObjectNumber`] of the auctioned object, if known.
    pub object_number: Option<ObjectNumber>,

    /// [`DateTime`] when this [`Outcome`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Outcome`] was modified the last time.
    pub updated_at: ModificationDateTime,
}

define_id! {
    /// ID of an [`Outcome`].
    Id
}

define_kind! {
    #[doc = "Way a bid on a case ended."]
    enum Action {
        #[doc = "Auction was withdrawn (撤回)."]
        Withdrawn = 1,

        #[doc = "Third party won the auction (第三人搶標)."]
        OutbidByThirdParty = 2,

        #[doc = "Co-owners may still preempt the buyer (等待優購)."]
        AwaitingPreemption = 3,

        #[doc = "Co-owner used the preemptive right (遭優購)."]
        Preempted = 4,

        #[doc = "No co-owner used the preemptive right (無人優購)."]
        NotPreempted = 5,
    }
}

define_text! {
    /// Number of the auctioned object in the court announcement.
    ObjectNumber(max = 20)
}

/// [`DateTime`] when an [`Outcome`] was created.
pub type CreationDateTime = DateTimeOf<(Outcome, unit::Creation)>;

/// [`DateTime`] when an [`Outcome`] was modified the last time.
pub type ModificationDateTime = DateTimeOf<(Outcome, unit::Modification)>;

#[cfg(test)]
mod spec {
    use super::Action;

    #[test]
    fn action_uses_kebab_case() {
        assert_eq!(
            Action::OutbidByThirdParty.to_string(),
            "outbid-by-third-party",
        );
        assert_eq!(
            "not-preempted".parse::<Action>().unwrap(),
            Action::NotPreempted,
        );
    }
}
