//! [`Command`] for updating a [`LandParcel`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        holding::{RegistryUrl, Remark},
        land_parcel, Holding, LandParcel,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`LandParcel`].
///
/// All the editable fields are replaced with the provided ones, and the
/// converted area is derived again.
#[derive(Clone, Debug)]
pub struct UpdateLandParcel {
    /// ID of the [`LandParcel`] to be updated.
    pub land_parcel_id: land_parcel::Id,

    /// New [`land_parcel::Number`] of the [`LandParcel`].
    pub land_number: Option<land_parcel::Number>,

    /// New [`RegistryUrl`] of the [`LandParcel`] transcript.
    pub registry_url: Option<RegistryUrl>,

    /// New [`Holding`] of the [`LandParcel`].
    pub holding: Holding,

    /// New [`Remark`] about the [`LandParcel`].
    pub remark: Option<Remark>,
}

impl<Db> Command<UpdateLandParcel> for Service<Db>
where
    Db: Database<
            Select<By<Option<LandParcel>, land_parcel::Id>>,
            Ok = Option<LandParcel>,
            Err = Traced<database::Error>,
        > + Database<
            Update<LandParcel>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = LandParcel;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateLandParcel,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateLandParcel {
            land_parcel_id,
            land_number,
            registry_url,
            holding,
            remark,
        } = cmd;

        let mut parcel = self
            .database()
            .execute(Select(By::<Option<LandParcel>, _>::new(land_parcel_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LandParcelNotExists(land_parcel_id))
            .map_err(tracerr::wrap!())?;

        parcel.land_number = land_number;
        parcel.registry_url = registry_url;
        parcel.holding = holding;
        parcel.remark = remark;
        parcel.recompute();
        parcel.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(parcel.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(parcel)
    }
}

/// Error of [`UpdateLandParcel`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`LandParcel`] with the provided ID does not exist.
    #[display("`LandParcel(id: {_0})` does not exist")]
    LandParcelNotExists(#[error(not(source))] land_parcel::Id),
}
