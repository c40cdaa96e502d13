//! In-memory [`Database`] implementation.

mod impls;

use std::{collections::HashMap, sync::Arc};

use derive_more::{Display, Error as StdError};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::{
        auction_round, bonus_adjustment, building_unit, case,
        comparable_property, final_decision, land_parcel, outcome, person,
        survey, AuctionRound, BonusAdjustment, BuildingUnit, Case,
        ComparableProperty, FinalDecision, LandParcel, Outcome, Person,
        Survey,
    },
    infra::database,
};
#[cfg(doc)]
use crate::infra::Database;

/// In-memory [`Database`] client.
///
/// Clones share the same tables.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Tables of this [`Memory`] database.
    state: Arc<RwLock<State>>,
}

impl Memory {
    /// Creates a new empty [`Memory`] database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tables of a [`Memory`] database.
#[derive(Debug, Default)]
struct State {
    /// [`Case`]s table.
    cases: HashMap<case::Id, Case>,

    /// [`LandParcel`]s table.
    land_parcels: HashMap<land_parcel::Id, LandParcel>,

    /// [`BuildingUnit`]s table.
    building_units: HashMap<building_unit::Id, BuildingUnit>,

    /// [`Person`]s table.
    persons: HashMap<person::Id, Person>,

    /// [`ComparableProperty`]s table.
    comparable_properties:
        HashMap<comparable_property::Id, ComparableProperty>,

    /// [`BonusAdjustment`]s table.
    bonus_adjustments: HashMap<bonus_adjustment::Id, BonusAdjustment>,

    /// [`AuctionRound`]s table.
    auction_rounds: HashMap<auction_round::Id, AuctionRound>,

    /// [`Survey`]s table.
    surveys: HashMap<survey::Id, Survey>,

    /// [`FinalDecision`]s table.
    final_decisions: HashMap<final_decision::Id, FinalDecision>,

    /// [`Outcome`]s table.
    outcomes: HashMap<outcome::Id, Outcome>,
}

impl State {
    /// Ensures the [`Case`] referenced by a row of the `table` exists.
    fn ensure_case(
        &self,
        id: case::Id,
        table: &'static str,
    ) -> Result<(), Traced<database::Error>> {
        if self.cases.contains_key(&id) {
            return Ok(());
        }
        Err(tracerr::new!(database::Error::from(
            Error::ForeignKeyViolation {
                table,
                parent: "cases",
            }
        )))
    }

    /// Ensures the [`ComparableProperty`] referenced by a row of the `table`
    /// exists.
    fn ensure_comparable_property(
        &self,
        id: comparable_property::Id,
        table: &'static str,
    ) -> Result<(), Traced<database::Error>> {
        if self.comparable_properties.contains_key(&id) {
            return Ok(());
        }
        Err(tracerr::new!(database::Error::from(
            Error::ForeignKeyViolation {
                table,
                parent: "comparable_properties",
            }
        )))
    }
}

/// [`Memory`] database [`Error`].
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Row references a parent row which doesn't exist.
    #[display("`{table}` row references a missing `{parent}` row")]
    ForeignKeyViolation {
        /// Table of the referencing row.
        table: &'static str,

        /// Table of the missing parent row.
        parent: &'static str,
    },
}
