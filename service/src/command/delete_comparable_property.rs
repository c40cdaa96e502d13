//! [`Command`] for deleting a [`ComparableProperty`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{comparable_property, ComparableProperty},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`ComparableProperty`] together with its
/// bonuses.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteComparableProperty {
    /// ID of the [`ComparableProperty`] to be deleted.
    pub comparable_id: comparable_property::Id,
}

impl<Db> Command<DeleteComparableProperty> for Service<Db>
where
    Db: Database<
            Select<By<Option<ComparableProperty>, comparable_property::Id>>,
            Ok = Option<ComparableProperty>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<ComparableProperty>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ComparableProperty;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteComparableProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteComparableProperty { comparable_id } = cmd;

        let comparable = self
            .database()
            .execute(Select(By::<Option<ComparableProperty>, _>::new(
                comparable_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ComparablePropertyNotExists(comparable_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(comparable.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(comparable)
    }
}

/// Error of [`DeleteComparableProperty`] [`Command`] execution.
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
