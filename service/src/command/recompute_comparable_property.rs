//! [`Command`] for re-deriving the adjusted value of a
//! [`ComparableProperty`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{comparable_property, ComparableProperty},
    infra::{database, Database},
    read::bonus_adjustment::Rates,
    Service,
};

use super::{Command, Recomputed};

/// [`Command`] for re-deriving the adjusted value of a [`ComparableProperty`]
/// from its persisted bonuses.
///
/// The [`ComparableProperty`] is written only if its adjusted value has
/// changed.
#[derive(Clone, Copy, Debug, From)]
pub struct RecomputeComparableProperty {
    /// ID of the [`ComparableProperty`] to be recomputed.
    pub comparable_id: comparable_property::Id,
}

impl<Db> Command<RecomputeComparableProperty> for Service<Db>
where
    Db: Database<
            Select<By<Option<ComparableProperty>, comparable_property::Id>>,
            Ok = Option<ComparableProperty>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Rates, comparable_property::Id>>,
            Ok = Rates,
            Err = Traced<database::Error>,
        > + Database<
            Update<ComparableProperty>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = Recomputed<ComparableProperty>;
    type Err = Traced<ExecutionError>;

    #[tracing::instrument(skip_all, fields(comparable_id = %cmd.comparable_id))]
    async fn execute(
        &self,
        cmd: RecomputeComparableProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RecomputeComparableProperty { comparable_id } = cmd;

        let mut comparable = self
            .database()
            .execute(Select(By::<Option<ComparableProperty>, _>::new(
                comparable_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ComparablePropertyNotExists(comparable_id))
            .map_err(tracerr::wrap!())?;

        let rates = self
            .database()
            .execute(Select(By::<Rates, _>::new(comparable_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if !comparable.apply_bonus_rates(&rates) {
            log::debug!("adjusted value is up to date");
            return Ok(Recomputed::Unchanged(comparable));
        }
        comparable.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(comparable.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(Recomputed::Updated(comparable))
    }
}

/// Error of [`RecomputeComparableProperty`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`ComparableProperty`] with the provided ID does not exist.
    #[display("`ComparableProperty(id: {_0})` does not exist")]
    ComparablePropertyNotExists(
        #[error(not(source))] comparable_property::Id,
    ),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::{operations::Insert, DateTime, Rate};

    use crate::{
        command::{fixture, Command as _, Recomputed},
        domain::{bonus_adjustment, comparable_property, BonusAdjustment},
        query,
    };

    use super::{ExecutionError, RecomputeComparableProperty};

    #[tokio::test]
    async fn picks_up_persisted_bonuses() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let comparable =
            fixture::new_comparable(&svc, case.id, "3000", "30").await;
        assert_eq!(comparable.adjusted_value(), fixture::money("100"));

        let now = DateTime::now();
        for rate in ["0.05", "-0.05", "0.3"] {
            svc.database()
                .execute(Insert(BonusAdjustment {
                    id: bonus_adjustment::Id::new(),
                    comparable_id: comparable.id,
                    inspector_id: None,
                    rate: rate.parse::<Rate>().unwrap(),
                    reason: None,
                    created_at: now.coerce(),
                    updated_at: now.coerce(),
                }))
                .await
                .unwrap();
        }

        let out = svc
            .execute(RecomputeComparableProperty {
                comparable_id: comparable.id,
            })
            .await
            .unwrap();

        assert!(out.is_updated());
        assert_eq!(out.into_inner().adjusted_value(), fixture::money("110"));
        assert_eq!(
            svc.execute(query::comparable_property::ById::by(comparable.id))
                .await
                .unwrap()
                .map(|c| c.adjusted_value()),
            Some(fixture::money("110")),
        );
    }

    #[tokio::test]
    async fn second_run_writes_nothing() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let comparable =
            fixture::new_comparable(&svc, case.id, "1000000", "30").await;

        let first = svc
            .execute(RecomputeComparableProperty {
                comparable_id: comparable.id,
            })
            .await
            .unwrap();
        let second = svc
            .execute(RecomputeComparableProperty {
                comparable_id: comparable.id,
            })
            .await
            .unwrap();

        assert_eq!(first, Recomputed::Unchanged(comparable.clone()));
        assert_eq!(second, Recomputed::Unchanged(comparable.clone()));
        assert_eq!(
            svc.execute(query::comparable_property::ById::by(comparable.id))
                .await
                .unwrap()
                .map(|c| c.updated_at),
            Some(comparable.updated_at),
        );
    }

    #[tokio::test]
    async fn fails_on_missing_comparable() {
        let svc = fixture::service();

        let err = svc
            .execute(RecomputeComparableProperty {
                comparable_id: comparable_property::Id::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::ComparablePropertyNotExists(_),
        ));
    }
}
