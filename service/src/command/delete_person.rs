//! [`Command`] for deleting a [`Person`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{person, Person},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for removing a [`Person`] from its case.
#[derive(Clone, Copy, Debug, From)]
pub struct DeletePerson {
    /// ID of the [`Person`] to be deleted.
    pub person_id: person::Id,
}

impl<Db> Command<DeletePerson> for Service<Db>
where
    Db: Database<
            Select<By<Option<Person>, person::Id>>,
            Ok = Option<Person>,
            Err = Traced<database::Error>,
        > + Database<Delete<Person>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Person;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeletePerson) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeletePerson { person_id } = cmd;

        let person = self
            .database()
            .execute(Select(By::<Option<Person>, _>::new(person_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PersonNotExists(person_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(person.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(person)
    }
}

/// Error of [`DeletePerson`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Person`] with the provided ID does not exist.
    #[display("`Person(id: {_0})` does not exist")]
    PersonNotExists(#[error(not(source))] person::Id),
}
