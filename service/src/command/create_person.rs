//! [`Command`] for creating a new [`Person`].

use common::{
    operations::{By, Insert, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{case, person, Case, Person},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Person`] to a [`Case`].
#[derive(Clone, Debug)]
pub struct CreatePerson {
    /// ID of the [`Case`] a new [`Person`] is a party of.
    pub case_id: case::Id,

    /// [`person::Name`] of a new [`Person`].
    pub name: person::Name,

    /// [`person::Role`] of a new [`Person`].
    pub role: Option<person::Role>,

    /// [`person::Phone`] of a new [`Person`].
    pub phone: Option<person::Phone>,
}

impl<Db> Command<CreatePerson> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<Insert<Person>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Person;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreatePerson) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreatePerson {
            case_id,
            name,
            role,
            phone,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let now = DateTime::now();
        let person = Person {
            id: person::Id::new(),
            case_id,
            name,
            role,
            phone,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(person.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(person)
    }
}

/// Error of [`CreatePerson`] [`Command`] execution.
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

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        command::{fixture, Command as _},
        domain::{case, person},
        query,
    };

    use super::{CreatePerson, ExecutionError};

    #[tokio::test]
    async fn adds_party_to_case() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let person = svc
            .execute(CreatePerson {
                case_id: case.id,
                name: person::Name::new("陳大文").unwrap(),
                role: Some(person::Role::Creditor),
                phone: person::Phone::new("0912-345-678"),
            })
            .await
            .unwrap();

        assert_eq!(
            svc.execute(query::persons::ByCase::by(case.id))
                .await
                .unwrap(),
            vec![person],
        );
    }

    #[tokio::test]
    async fn fails_on_missing_case() {
        let svc = fixture::service();

        let err = svc
            .execute(CreatePerson {
                case_id: case::Id::new(),
                name: person::Name::new("陳大文").unwrap(),
                role: None,
                phone: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::CaseNotExists(_)));
    }
}
