//! [`Snapshot`] of a foreclosure case.

use std::{io, path::Path};

use common::{Date, Money, Ping, Rate};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use service::domain::{
    auction_round, bonus_adjustment, building_unit, case, comparable_property,
    final_decision, holding, land_parcel, outcome, person, survey, user,
    Holding,
};

/// Snapshot of a foreclosure case with all its records, as exported by the
/// back office.
///
/// Derived figures are never read from a [`Snapshot`], but always computed
/// while replaying it.
#[derive(Clone, Debug, Deserialize)]
pub struct Snapshot {
    /// [`Case`] itself.
    pub case: Case,

    /// [`LandParcel`]s of the [`Case`].
    #[serde(default)]
    pub land_parcels: Vec<LandParcel>,

    /// [`BuildingUnit`]s of the [`Case`].
    #[serde(default)]
    pub building_units: Vec<BuildingUnit>,

    /// [`Person`]s of the [`Case`].
    #[serde(default)]
    pub persons: Vec<Person>,

    /// [`ComparableProperty`]s of the [`Case`].
    #[serde(default)]
    pub comparables: Vec<ComparableProperty>,

    /// [`AuctionRound`]s of the [`Case`].
    #[serde(default)]
    pub auction_rounds: Vec<AuctionRound>,

    /// [`Survey`]s of the [`Case`].
    #[serde(default)]
    pub surveys: Vec<Survey>,

    /// [`FinalDecision`]s made on the [`Case`].
    #[serde(default)]
    pub final_decisions: Vec<FinalDecision>,

    /// [`Outcome`]s of bidding on the [`Case`].
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

impl Snapshot {
    /// Loads a [`Snapshot`] from the JSON file at the provided `path`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Io`] if the file cannot be read.
    /// - [`LoadError::Json`] if the file contents is not a valid
    ///   [`Snapshot`].
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Error of loading a [`Snapshot`].
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// Failed to read the file.
    #[display("failed to read snapshot: {_0}")]
    Io(io::Error),

    /// Failed to parse the file.
    #[display("failed to parse snapshot: {_0}")]
    Json(serde_json::Error),
}

/// Foreclosure case in a [`Snapshot`].
#[derive(Clone, Debug, Deserialize)]
pub struct Case {
    /// [`case::Number`] assigned by the court.
    pub number: case::Number,

    /// [`case::Company`] handling the case.
    #[serde(default)]
    pub company: Option<case::Company>,

    /// [`case::Status`] of the case.
    #[serde(default)]
    pub status: Option<case::Status>,

    /// ID of the [`user`] owning the case.
    ///
    /// A new one is generated if omitted.
    #[serde(default)]
    pub owner_id: Option<user::Id>,

    /// [`Address`] of the property under foreclosure.
    #[serde(default)]
    pub address: Address,
}

/// Address parts of a [`Case`] in a [`Snapshot`].
///
/// Blank parts are treated as missing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    /// City (縣市).
    pub city: Option<String>,

    /// Township (鄉鎮區).
    pub township: Option<String>,

    /// Land section (段) of the registry.
    pub big_section: Option<String>,

    /// Land subsection (小段) of the registry.
    pub small_section: Option<String>,

    /// Village (村里).
    pub village: Option<String>,

    /// Neighborhood (鄰).
    pub neighbor: Option<String>,

    /// Street or road (街路).
    pub street: Option<String>,

    /// Street section (段).
    pub section: Option<String>,

    /// Lane (巷).
    pub lane: Option<String>,

    /// Alley (弄).
    pub alley: Option<String>,

    /// Number plate (號).
    pub number_plate: Option<String>,

    /// Floor (樓).
    pub floor: Option<String>,
}

impl From<Address> for case::Address {
    fn from(addr: Address) -> Self {
        let part = |p: Option<String>| p.and_then(case::AddressPart::new);

        Self {
            city: part(addr.city),
            township: part(addr.township),
            big_section: part(addr.big_section),
            small_section: part(addr.small_section),
            village: part(addr.village),
            neighbor: part(addr.neighbor),
            street: part(addr.street),
            section: part(addr.section),
            lane: part(addr.lane),
            alley: part(addr.alley),
            number_plate: part(addr.number_plate),
            floor: part(addr.floor),
        }
    }
}

/// Land parcel of a [`Case`] in a [`Snapshot`].
#[derive(Clone, Debug, Deserialize)]
pub struct LandParcel {
    /// [`land_parcel::Number`] in the registry.
    #[serde(default)]
    pub land_number: Option<land_parcel::Number>,

    /// [`holding::RegistryUrl`] of the transcript.
    #[serde(default)]
    pub registry_url: Option<holding::RegistryUrl>,

    /// Registered [`Holding`].
    #[serde(flatten)]
    pub holding: Holding,

    /// [`holding::Remark`] about the land parcel.
    #[serde(default)]
    pub remark: Option<holding::Remark>,
}

/// Building unit of a [`Case`] in a [`Snapshot`].
#[derive(Clone, Debug, Deserialize)]
pub struct BuildingUnit {
    /// [`building_unit::Number`] in the registry.
    #[serde(default)]
    pub build_number: Option<building_unit::Number>,

    /// [`holding::RegistryUrl`] of the transcript.
    #[serde(default)]
    pub registry_url: Option<holding::RegistryUrl>,

    /// Registered [`Holding`].
    #[serde(flatten)]
    pub holding: Holding,

    /// [`building_unit::Usage`] of the building unit.
    #[serde(default)]
    pub usage: building_unit::Usage,

    /// [`building_unit::UsePartition`] of the building unit.
    #[serde(default)]
    pub use_partition: Option<building_unit::UsePartition>,

    /// [`holding::Remark`] about the building unit.
    #[serde(default)]
    pub remark: Option<holding::Remark>,
}

/// Party of a [`Case`] in a [`Snapshot`].
#[derive(Clone, Debug, Deserialize)]
pub struct Person {
    /// [`person::Name`] of the party.
    pub name: person::Name,

    /// [`person::Role`] of the party.
    #[serde(default)]
    pub role: Option<person::Role>,

    /// [`person::Phone`] of the party.
    #[serde(default)]
    pub phone: Option<person::Phone>,
}

/// Comparable property of a [`Case`] in a [`Snapshot`].
#[derive(Clone, Debug, Deserialize)]
pub struct ComparableProperty {
    /// [`comparable_property::Kind`] of the comparable property.
    #[serde(default)]
    pub kind: comparable_property::Kind,

    /// [`comparable_property::Address`] of the comparable property.
    #[serde(default)]
    pub address: Option<comparable_property::Address>,

    /// [`comparable_property::AttachmentUrl`] of its source.
    #[serde(default)]
    pub attachment_url: Option<comparable_property::AttachmentUrl>,

    /// Age in years.
    #[serde(default)]
    pub house_age: rust_decimal::Decimal,

    /// [`Date`] of the sale.
    #[serde(default)]
    pub transaction_date: Option<Date>,

    /// [`comparable_property::FloorHeight`] of the comparable property.
    #[serde(default)]
    pub floor_height: Option<comparable_property::FloorHeight>,

    /// Total price.
    pub total_price: Money,

    /// Main build area.
    pub build_area: Ping,

    /// Additional build area.
    #[serde(default)]
    pub sub_build_area: Ping,

    /// [`BonusAdjustment`]s of the comparable property.
    #[serde(default)]
    pub bonuses: Vec<BonusAdjustment>,
}

/// Bonus adjustment of a [`ComparableProperty`] in a [`Snapshot`].
#[derive(Clone, Debug, Deserialize)]
pub struct BonusAdjustment {
    /// ID of the [`user`] who inspected the difference.
    #[serde(default)]
    pub inspector_id: Option<user::Id>,

    /// [`Rate`] of the adjustment.
    pub rate: Rate,

    /// [`bonus_adjustment::Reason`] of the adjustment.
    #[serde(default)]
    pub reason: Option<bonus_adjustment::Reason>,
}

/// Auction round of a [`Case`] in a [`Snapshot`].
#[derive(Clone, Debug, Deserialize)]
pub struct AuctionRound {
    /// [`auction_round::Round`] number.
    pub round: auction_round::Round,

    /// [`Date`] of the auction.
    #[serde(default)]
    pub auction_date: Option<Date>,

    /// Floor price.
    pub floor_price: Money,

    /// Number of listing views.
    #[serde(default)]
    pub clicks: Option<auction_round::Count>,

    /// Number of listing watchers.
    #[serde(default)]
    pub monitors: Option<auction_round::Count>,

    /// Number of similar cases auctioned nearby.
    #[serde(default)]
    pub case_count: Option<auction_round::Count>,

    /// Security deposit required to bid.
    #[serde(default)]
    pub margin: Option<Money>,
}

/// Field survey of a [`Case`] in a [`Snapshot`].
#[derive(Clone, Debug, Deserialize)]
pub struct Survey {
    /// Notes of the first [`survey::Day`].
    #[serde(default)]
    pub first_day: Option<survey::Day>,

    /// Notes of the second [`survey::Day`].
    #[serde(default)]
    pub second_day: Option<survey::Day>,

    /// [`survey::Links`] to the gathered documents.
    #[serde(default)]
    pub links: survey::Links,
}

/// Final decision on a [`Case`] in a [`Snapshot`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FinalDecision {
    /// [`final_decision::Verdict`] itself.
    pub verdict: Option<final_decision::Verdict>,

    /// [`final_decision::Category`] of the decision.
    pub category: Option<final_decision::Category>,

    /// [`final_decision::Remark`] about the decision.
    pub remark: Option<final_decision::Remark>,

    /// [`final_decision::DecisionMaker`] who signed the decision off.
    pub decision_maker: Option<final_decision::DecisionMaker>,

    /// [`Date`] of the decision.
    pub date: Option<Date>,

    /// [`final_decision::WorkArea`] of the decision.
    pub work_area: Option<final_decision::WorkArea>,
}

/// Bidding outcome of a [`Case`] in a [`Snapshot`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Outcome {
    /// [`Date`] the purchase was stopped on.
    pub stop_buy_date: Option<Date>,

    /// [`outcome::Action`] the bid ended with.
    pub action: Option<outcome::Action>,

    /// [`auction_round::Round`] the bid was placed in.
    pub bid_round: Option<auction_round::Round>,

    /// Amount of the bid.
    pub bid_money: Option<Money>,

    /// [`outcome::ObjectNumber`] of the auctioned object.
    pub object_number: Option<outcome::ObjectNumber>,
}

#[cfg(test)]
mod spec {
    use service::domain::{building_unit::Usage, case, outcome};

    use super::Snapshot;

    #[test]
    fn parses_demo_snapshot() {
        let snapshot: Snapshot =
            serde_json::from_str(include_str!("../../demos/case.json"))
                .unwrap();

        assert_eq!(snapshot.case.status, Some(case::Status::InProgress));
        assert_eq!(snapshot.land_parcels.len(), 2);
        assert_eq!(snapshot.building_units.len(), 2);
        assert_eq!(snapshot.building_units[1].usage, Usage::CommonFacility);
        assert_eq!(snapshot.comparables.len(), 2);
        assert_eq!(snapshot.comparables[0].bonuses.len(), 2);
        assert_eq!(snapshot.auction_rounds.len(), 2);
        assert_eq!(snapshot.surveys[0].links.count(), 2);
        assert_eq!(snapshot.final_decisions.len(), 1);
        assert_eq!(
            snapshot.outcomes[0].action,
            Some(outcome::Action::OutbidByThirdParty),
        );
    }

    #[test]
    fn skips_blank_address_parts() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "case": {
                    "number": "113司執字第1號",
                    "address": {
                        "city": "臺北市",
                        "township": "  ",
                        "street": " 忠孝東路 ",
                        "number_plate": "10號"
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            case::Address::from(snapshot.case.address).full(),
            "臺北市忠孝東路10號",
        );
        assert!(snapshot.land_parcels.is_empty());
        assert!(snapshot.surveys.is_empty());
    }

    #[test]
    fn rejects_out_of_range_rate() {
        let res = serde_json::from_str::<Snapshot>(
            r#"{
                "case": { "number": "1" },
                "comparables": [{
                    "total_price": "1000000",
                    "build_area": "30",
                    "bonuses": [{ "rate": "1.5" }]
                }]
            }"#,
        );

        assert!(res.is_err());
    }
}
