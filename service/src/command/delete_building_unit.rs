//! [`Command`] for deleting a [`BuildingUnit`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{building_unit, BuildingUnit},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`BuildingUnit`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteBuildingUnit {
    /// ID of the [`BuildingUnit`] to be deleted.
    pub building_unit_id: building_unit::Id,
}

impl<Db> Command<DeleteBuildingUnit> for Service<Db>
where
    Db: Database<
            Select<By<Option<BuildingUnit>, building_unit::Id>>,
            Ok = Option<BuildingUnit>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<BuildingUnit>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = BuildingUnit;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteBuildingUnit,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteBuildingUnit { building_unit_id } = cmd;

        let unit = self
            .database()
            .execute(Select(By::<Option<BuildingUnit>, _>::new(
                building_unit_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BuildingUnitNotExists(building_unit_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(unit.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(unit)
    }
}

/// Error of [`DeleteBuildingUnit`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`BuildingUnit`] with the provided ID does not exist.
    #[display("`BuildingUnit(id: {_0})` does not exist")]
    BuildingUnitNotExists(#[error(not(source))] building_unit::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        command::{fixture, Command as _},
        query,
    };

    use super::{DeleteBuildingUnit, ExecutionError};

    #[tokio::test]
    async fn deletes_only_this_unit() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let unit = fixture::new_building_unit(
            &svc,
            case.id,
            fixture::holding("100", 1, 1),
        )
        .await;
        let kept = fixture::new_building_unit(
            &svc,
            case.id,
            fixture::holding("50", 1, 1),
        )
        .await;

        let deleted = svc
            .execute(DeleteBuildingUnit {
                building_unit_id: unit.id,
            })
            .await
            .unwrap();

        assert_eq!(deleted, unit);
        assert_eq!(
            svc.execute(query::building_units::ByCase::by(case.id))
                .await
                .unwrap(),
            vec![kept],
        );

        let err = svc
            .execute(DeleteBuildingUnit {
                building_unit_id: unit.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::BuildingUnitNotExists(_),
        ));
    }
}
