//! [`Command`] for deleting a [`BonusAdjustment`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{bonus_adjustment, BonusAdjustment, ComparableProperty},
    infra::{database, Database},
    Service,
};

use super::{
    recompute_comparable_property, Command, RecomputeComparableProperty,
    Recomputed,
};

/// [`Command`] for deleting a [`BonusAdjustment`].
///
/// The adjusted value of the [`ComparableProperty`] is recomputed once the
/// [`BonusAdjustment`] is deleted.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteBonusAdjustment {
    /// ID of the [`BonusAdjustment`] to be deleted.
    pub bonus_id: bonus_adjustment::Id,
}

impl<Db> Command<DeleteBonusAdjustment> for Service<Db>
where
    Db: Database<
            Select<By<Option<BonusAdjustment>, bonus_adjustment::Id>>,
            Ok = Option<BonusAdjustment>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<BonusAdjustment>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
    Self: Command<
        RecomputeComparableProperty,
        Ok = Recomputed<ComparableProperty>,
        Err = Traced<recompute_comparable_property::ExecutionError>,
    >,
{
    type Ok = BonusAdjustment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteBonusAdjustment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteBonusAdjustment { bonus_id } = cmd;

        let bonus = self
            .database()
            .execute(Select(By::<Option<BonusAdjustment>, _>::new(bonus_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BonusAdjustmentNotExists(bonus_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(bonus.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        _ = self
            .execute(RecomputeComparableProperty {
                comparable_id: bonus.comparable_id,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(bonus)
    }
}

/// Error of [`DeleteBonusAdjustment`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`BonusAdjustment`] with the provided ID does not exist.
    #[display("`BonusAdjustment(id: {_0})` does not exist")]
    BonusAdjustmentNotExists(#[error(not(source))] bonus_adjustment::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Failed to recompute the [`ComparableProperty`].
    #[display("Failed to recompute `ComparableProperty`: {_0}")]
    #[from]
    Recompute(recompute_comparable_property::ExecutionError),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::Rate;

    use crate::{
        command::{fixture, Command as _, CreateBonusAdjustment},
        query,
    };

    use super::{DeleteBonusAdjustment, ExecutionError};

    #[tokio::test]
    async fn last_bonus_restores_unit_price() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let comparable =
            fixture::new_comparable(&svc, case.id, "1000000", "30").await;
        let bonus = svc
            .execute(CreateBonusAdjustment {
                comparable_id: comparable.id,
                inspector_id: None,
                rate: "0.15".parse::<Rate>().unwrap(),
                reason: None,
            })
            .await
            .unwrap();

        _ = svc
            .execute(DeleteBonusAdjustment { bonus_id: bonus.id })
            .await
            .unwrap();

        let comparable = svc
            .execute(query::comparable_property::ById::by(comparable.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(comparable.adjusted_value(), comparable.unit_price());
        assert_eq!(comparable.adjusted_value(), fixture::money("33333"));

        let err = svc
            .execute(DeleteBonusAdjustment { bonus_id: bonus.id })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::BonusAdjustmentNotExists(_),
        ));
    }
}
