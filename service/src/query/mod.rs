//! [`Query`] definition.

pub mod auction_round;
pub mod auction_rounds;
pub mod bonus_adjustment;
pub mod bonus_adjustments;
pub mod building_unit;
pub mod building_units;
pub mod case;
pub mod cases;
pub mod comparable_properties;
pub mod comparable_property;
pub mod final_decision;
pub mod final_decisions;
pub mod land_parcel;
pub mod land_parcels;
pub mod outcome;
pub mod outcomes;
pub mod person;
pub mod persons;
pub mod report;
pub mod survey;
pub mod surveys;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{database, Database},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Database`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct DatabaseQuery<T>(T);

impl<W, B> DatabaseQuery<By<W, B>> {
    /// Creates a new [`DatabaseQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<Db, W, B> Query<DatabaseQuery<By<W, B>>> for Service<Db>
where
    Db: Database<Select<By<W, B>>, Ok = W, Err = Traced<database::Error>>,
{
    type Ok = W;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        DatabaseQuery(by): DatabaseQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        command::{fixture, Command as _, CreateCase},
        domain::{case, user},
    };

    use super::cases;

    #[tokio::test]
    async fn lists_owned_cases_by_number() {
        let svc = fixture::service();
        let owner_id = user::Id::new();
        for number in ["113司執字第3號", "113司執字第1號", "113司執字第2號"] {
            _ = svc
                .execute(CreateCase {
                    number: case::Number::new(number).unwrap(),
                    company: None,
                    status: None,
                    owner_id,
                    address: case::Address::default(),
                })
                .await
                .unwrap();
        }
        _ = fixture::new_case(&svc).await;

        let numbers = svc
            .execute(cases::ByOwner::by(owner_id))
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.number.to_string())
            .collect::<Vec<_>>();

        assert_eq!(
            numbers,
            ["113司執字第1號", "113司執字第2號", "113司執字第3號"],
        );
    }
}
