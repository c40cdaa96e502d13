//! [`Command`] for updating a [`BonusAdjustment`].

use common::{
    operations::{By, Select, Update},
    DateTime, Rate,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        bonus_adjustment, comparable_property, user, BonusAdjustment,
        ComparableProperty,
    },
    infra::{database, Database},
    Service,
};

use super::{
    recompute_comparable_property, Command, RecomputeComparableProperty,
    Recomputed,
};

/// [`Command`] for updating a [`BonusAdjustment`].
///
/// The adjusted value of the [`ComparableProperty`] is recomputed once the
/// [`BonusAdjustment`] is persisted. If the [`BonusAdjustment`] is moved to
/// another [`ComparableProperty`], both of them are recomputed.
#[derive(Clone, Debug)]
pub struct UpdateBonusAdjustment {
    /// ID of the [`BonusAdjustment`] to be updated.
    pub bonus_id: bonus_adjustment::Id,

    /// ID of the [`ComparableProperty`] the [`BonusAdjustment`] applies to.
    pub comparable_id: comparable_property::Id,

    /// ID of the [`user`] who inspected the difference.
    pub inspector_id: Option<user::Id>,

    /// New [`Rate`] of the [`BonusAdjustment`].
    pub rate: Rate,

    /// New [`bonus_adjustment::Reason`] of the [`BonusAdjustment`].
    pub reason: Option<bonus_adjustment::Reason>,
}

impl<Db> Command<UpdateBonusAdjustment> for Service<Db>
where
    Db: Database<
            Select<By<Option<BonusAdjustment>, bonus_adjustment::Id>>,
            Ok = Option<BonusAdjustment>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<ComparableProperty>, comparable_property::Id>>,
            Ok = Option<ComparableProperty>,
            Err = Traced<database::Error>,
        > + Database<
            Update<BonusAdjustment>,
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
        cmd: UpdateBonusAdjustment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateBonusAdjustment {
            bonus_id,
            comparable_id,
            inspector_id,
            rate,
            reason,
        } = cmd;

        let mut bonus = self
            .database()
            .execute(Select(By::<Option<BonusAdjustment>, _>::new(bonus_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BonusAdjustmentNotExists(bonus_id))
            .map_err(tracerr::wrap!())?;

        let previous_comparable_id = bonus.comparable_id;
        if previous_comparable_id != comparable_id {
            self.database()
                .execute(Select(By::<Option<ComparableProperty>, _>::new(
                    comparable_id,
                )))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::ComparablePropertyNotExists(comparable_id))
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }

        bonus.comparable_id = comparable_id;
        bonus.inspector_id = inspector_id;
        bonus.rate = rate;
        bonus.reason = reason;
        bonus.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(bonus.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        _ = self
            .execute(RecomputeComparableProperty { comparable_id })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if previous_comparable_id != comparable_id {
            _ = self
                .execute(RecomputeComparableProperty {
                    comparable_id: previous_comparable_id,
                })
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }

        Ok(bonus)
    }
}

/// Error of [`UpdateBonusAdjustment`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`BonusAdjustment`] with the provided ID does not exist.
    #[display("`BonusAdjustment(id: {_0})` does not exist")]
    BonusAdjustmentNotExists(#[error(not(source))] bonus_adjustment::Id),

    /// [`ComparableProperty`] with the provided ID does not exist.
    #[display("`ComparableProperty(id: {_0})` does not exist")]
    ComparablePropertyNotExists(
        #[error(not(source))] comparable_property::Id,
    ),

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
    use common::{Money, Rate};

    use crate::{
        command::{fixture, Command as _, CreateBonusAdjustment},
        domain::{bonus_adjustment, comparable_property, BonusAdjustment},
        infra::Memory,
        query,
        Service,
    };

    use super::{ExecutionError, UpdateBonusAdjustment};

    fn rate(s: &str) -> Rate {
        s.parse().unwrap()
    }

    async fn adjusted_value(
        svc: &Service<Memory>,
        id: comparable_property::Id,
    ) -> Money {
        svc.execute(query::comparable_property::ById::by(id))
            .await
            .unwrap()
            .unwrap()
            .adjusted_value()
    }

    fn cmd(
        bonus: &BonusAdjustment,
        comparable_id: comparable_property::Id,
        rate: Rate,
    ) -> UpdateBonusAdjustment {
        UpdateBonusAdjustment {
            bonus_id: bonus.id,
            comparable_id,
            inspector_id: bonus.inspector_id,
            rate,
            reason: bonus.reason.clone(),
        }
    }

    #[tokio::test]
    async fn recomputes_parent_with_new_rate() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let comparable =
            fixture::new_comparable(&svc, case.id, "3000", "30").await;
        let bonus = svc
            .execute(CreateBonusAdjustment {
                comparable_id: comparable.id,
                inspector_id: None,
                rate: rate("0.1"),
                reason: None,
            })
            .await
            .unwrap();
        assert_eq!(
            adjusted_value(&svc, comparable.id).await,
            fixture::money("110"),
        );

        _ = svc
            .execute(cmd(&bonus, comparable.id, rate("-0.25")))
            .await
            .unwrap();

        assert_eq!(
            adjusted_value(&svc, comparable.id).await,
            fixture::money("75"),
        );
    }

    #[tokio::test]
    async fn recomputes_both_parents_when_moved() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let from = fixture::new_comparable(&svc, case.id, "3000", "30").await;
        let to = fixture::new_comparable(&svc, case.id, "6000", "30").await;
        let bonus = svc
            .execute(CreateBonusAdjustment {
                comparable_id: from.id,
                inspector_id: None,
                rate: rate("0.5"),
                reason: None,
            })
            .await
            .unwrap();

        let moved =
            svc.execute(cmd(&bonus, to.id, bonus.rate)).await.unwrap();

        assert_eq!(moved.comparable_id, to.id);
        assert_eq!(adjusted_value(&svc, from.id).await, fixture::money("100"));
        assert_eq!(adjusted_value(&svc, to.id).await, fixture::money("300"));
    }

    #[tokio::test]
    async fn fails_on_missing_records() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let comparable =
            fixture::new_comparable(&svc, case.id, "3000", "30").await;
        let bonus = svc
            .execute(CreateBonusAdjustment {
                comparable_id: comparable.id,
                inspector_id: None,
                rate: rate("0.1"),
                reason: None,
            })
            .await
            .unwrap();

        let err = svc
            .execute(cmd(&bonus, comparable_property::Id::new(), bonus.rate))
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::ComparablePropertyNotExists(_),
        ));

        let mut missing = bonus.clone();
        missing.id = bonus_adjustment::Id::new();
        let err = svc
            .execute(cmd(&missing, comparable.id, bonus.rate))
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::BonusAdjustmentNotExists(_),
        ));
    }
}
