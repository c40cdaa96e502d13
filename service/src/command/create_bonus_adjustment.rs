//! [`Command`] for creating a new [`BonusAdjustment`].

use common::{
    operations::{By, Insert, Select},
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

/// [`Command`] for creating a new [`BonusAdjustment`] of a
/// [`ComparableProperty`].
///
/// The adjusted value of the [`ComparableProperty`] is recomputed once the
/// new [`BonusAdjustment`] is persisted.
#[derive(Clone, Debug)]
pub struct CreateBonusAdjustment {
    /// ID of the [`ComparableProperty`] a new [`BonusAdjustment`] applies
    /// to.
    pub comparable_id: comparable_property::Id,

    /// ID of the [`user`] who inspected the difference.
    pub inspector_id: Option<user::Id>,

    /// [`Rate`] of a new [`BonusAdjustment`].
    pub rate: Rate,

    /// [`bonus_adjustment::Reason`] of a new [`BonusAdjustment`].
    pub reason: Option<bonus_adjustment::Reason>,
}

impl<Db> Command<CreateBonusAdjustment> for Service<Db>
where
    Db: Database<
            Select<By<Option<ComparableProperty>, comparable_property::Id>>,
            Ok = Option<ComparableProperty>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<BonusAdjustment>,
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
        cmd: CreateBonusAdjustment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBonusAdjustment {
            comparable_id,
            inspector_id,
            rate,
            reason,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<ComparableProperty>, _>::new(
                comparable_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ComparablePropertyNotExists(comparable_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let now = DateTime::now();
        let bonus = BonusAdjustment {
            id: bonus_adjustment::Id::new(),
            comparable_id,
            inspector_id,
            rate,
            reason,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(bonus.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        _ = self
            .execute(RecomputeComparableProperty { comparable_id })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(bonus)
    }
}

/// Error of [`CreateBonusAdjustment`] [`Command`] execution.
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

    /// Failed to recompute the [`ComparableProperty`].
    #[display("Failed to recompute `ComparableProperty`: {_0}")]
    #[from]
    Recompute(recompute_comparable_property::ExecutionError),
}
