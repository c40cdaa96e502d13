//! [`Command`] for creating a new [`BuildingUnit`].

use common::{
    operations::{By, Insert, Select},
    DateTime, Ping,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        building_unit, case,
        holding::{RegistryUrl, Remark},
        BuildingUnit, Case, Holding,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`BuildingUnit`] of a [`Case`].
#[derive(Clone, Debug)]
pub struct CreateBuildingUnit {
    /// ID of the [`Case`] a new [`BuildingUnit`] belongs to.
    pub case_id: case::Id,

    /// [`building_unit::Number`] of a new [`BuildingUnit`].
    pub build_number: Option<building_unit::Number>,

    /// [`RegistryUrl`] of the transcript a new [`BuildingUnit`] is listed in.
    pub registry_url: Option<RegistryUrl>,

    /// [`Holding`] of a new [`BuildingUnit`].
    pub holding: Holding,

    /// [`building_unit::Usage`] of a new [`BuildingUnit`].
    pub usage: building_unit::Usage,

    /// [`building_unit::UsePartition`] of a new [`BuildingUnit`].
    pub use_partition: Option<building_unit::UsePartition>,

    /// [`Remark`] about a new [`BuildingUnit`].
    pub remark: Option<Remark>,
}

impl<Db> Command<CreateBuildingUnit> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<BuildingUnit>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = BuildingUnit;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateBuildingUnit,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBuildingUnit {
            case_id,
            build_number,
            registry_url,
            holding,
            usage,
            use_partition,
            remark,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let now = DateTime::now();
        let mut unit = BuildingUnit {
            id: building_unit::Id::new(),
            case_id,
            build_number,
            registry_url,
            holding,
            usage,
            use_partition,
            remark,
            converted_area: Ping::ZERO,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };
        unit.recompute();

        self.database()
            .execute(Insert(unit.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(unit)
    }
}

/// Error of [`CreateBuildingUnit`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Case`] with the provided ID does not exist.
    #[display("`Case(id: {_0})` does not exist")]
    CaseNotExists(#[error(not(source))] case::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}
