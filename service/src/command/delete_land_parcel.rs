//! [`Command`] for deleting a [`LandParcel`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{land_parcel, LandParcel},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`LandParcel`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteLandParcel {
    /// ID of the [`LandParcel`] to be deleted.
    pub land_parcel_id: land_parcel::Id,
}

impl<Db> Command<DeleteLandParcel> for Service<Db>
where
    Db: Database<
            Select<By<Option<LandParcel>, land_parcel::Id>>,
            Ok = Option<LandParcel>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<LandParcel>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = LandParcel;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteLandParcel,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteLandParcel { land_parcel_id } = cmd;

        let parcel = self
            .database()
            .execute(Select(By::<Option<LandParcel>, _>::new(land_parcel_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LandParcelNotExists(land_parcel_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(parcel.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(parcel)
    }
}

/// Error of [`DeleteLandParcel`] [`Command`] execution.
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
