//! [`Command`] for updating a [`Person`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{person, Person},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`Person`].
#[derive(Clone, Debug)]
pub struct UpdatePerson {
    /// ID of the [`Person`] to be updated.
    pub person_id: person::Id,

    /// New [`person::Name`] of the [`Person`].
    pub name: person::Name,

    /// New [`person::Role`] of the [`Person`].
    pub role: Option<person::Role>,

    /// New [`person::Phone`] of the [`Person`].
    pub phone: Option<person::Phone>,
}

impl<Db> Command<UpdatePerson> for Service<Db>
where
    Db: Database<
            Select<By<Option<Person>, person::Id>>,
            Ok = Option<Person>,
            Err = Traced<database::Error>,
        > + Database<Update<Person>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Person;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdatePerson) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdatePerson {
            person_id,
            name,
            role,
            phone,
        } = cmd;

        let mut person = self
            .database()
            .execute(Select(By::<Option<Person>, _>::new(person_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PersonNotExists(person_id))
            .map_err(tracerr::wrap!())?;

        person.name = name;
        person.role = role;
        person.phone = phone;
        person.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(person.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(person)
    }
}

/// Error of [`UpdatePerson`] [`Command`] execution.
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
