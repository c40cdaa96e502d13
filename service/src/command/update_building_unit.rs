//! [`Command`] for updating a [`BuildingUnit`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        building_unit,
        holding::{RegistryUrl, Remark},
        BuildingUnit, Holding,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`BuildingUnit`].
///
/// All the editable fields are replaced with the provided ones, and the
/// converted area is derived again.
#[derive(Clone, Debug)]
pub struct UpdateBuildingUnit {
    /// ID of the [`BuildingUnit`] to be updated.
    pub building_unit_id: building_unit::Id,

    /// New [`building_unit::Number`] of the [`BuildingUnit`].
    pub build_number: Option<building_unit::Number>,

    /// New [`RegistryUrl`] of the [`BuildingUnit`] transcript.
    pub registry_url: Option<RegistryUrl>,

    /// New [`Holding`] of the [`BuildingUnit`].
    pub holding: Holding,

    /// New [`building_unit::Usage`] of the [`BuildingUnit`].
    pub usage: building_unit::Usage,

    /// New [`building_unit::UsePartition`] of the [`BuildingUnit`].
    pub use_partition: Option<building_unit::UsePartition>,

    /// New [`Remark`] about the [`BuildingUnit`].
    pub remark: Option<Remark>,
}

impl<Db> Command<UpdateBuildingUnit> for Service<Db>
where
    Db: Database<
            Select<By<Option<BuildingUnit>, building_unit::Id>>,
            Ok = Option<BuildingUnit>,
            Err = Traced<database::Error>,
        > + Database<
            Update<BuildingUnit>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = BuildingUnit;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateBuildingUnit,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateBuildingUnit {
            building_unit_id,
            build_number,
            registry_url,
            holding,
            usage,
            use_partition,
            remark,
        } = cmd;

        let mut unit = self
            .database()
            .execute(Select(By::<Option<BuildingUnit>, _>::new(
                building_unit_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BuildingUnitNotExists(building_unit_id))
            .map_err(tracerr::wrap!())?;

        unit.build_number = build_number;
        unit.registry_url = registry_url;
        unit.holding = holding;
        unit.usage = usage;
        unit.use_partition = use_partition;
        unit.remark = remark;
        unit.recompute();
        unit.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(unit.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(unit)
    }
}

/// Error of [`UpdateBuildingUnit`] [`Command`] execution.
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
