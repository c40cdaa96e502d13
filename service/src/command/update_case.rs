//! [`Command`] for updating a [`Case`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{case, user, Case},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`Case`].
///
/// All the editable fields are replaced with the provided ones.
#[derive(Clone, Debug)]
pub struct UpdateCase {
    /// ID of the [`Case`] to be updated.
    pub case_id: case::Id,

    /// New [`case::Number`] of the [`Case`].
    pub number: case::Number,

    /// New [`case::Company`] handling the [`Case`].
    pub company: Option<case::Company>,

    /// New [`case::Status`] of the [`Case`].
    pub status: Option<case::Status>,

    /// ID of the [`user`] owning the [`Case`].
    pub owner_id: user::Id,

    /// New [`case::Address`] of the [`Case`].
    pub address: case::Address,
}

impl<Db> Command<UpdateCase> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<Update<Case>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Case;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateCase) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateCase {
            case_id,
            number,
            company,
            status,
            owner_id,
            address,
        } = cmd;

        let mut case = self
            .database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())?;

        case.number = number;
        case.company = company;
        case.status = status;
        case.owner_id = owner_id;
        case.address = address;
        case.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(case.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(case)
    }
}

/// Error of [`UpdateCase`] [`Command`] execution.
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
        domain::{case, user},
    };

    use super::{ExecutionError, UpdateCase};

    #[tokio::test]
    async fn replaces_editable_fields() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let updated = svc
            .execute(UpdateCase {
                case_id: case.id,
                number: case::Number::new("113司執字第9999號").unwrap(),
                company: case::Company::new("大安法拍"),
                status: Some(case::Status::Closed),
                owner_id: case.owner_id,
                address: case::Address {
                    city: case::AddressPart::new("臺中市"),
                    ..case::Address::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.id, case.id);
        assert_eq!(updated.number.as_ref(), "113司執字第9999號");
        assert_eq!(updated.status, Some(case::Status::Closed));
        assert_eq!(updated.address.full(), "臺中市");
        assert_eq!(updated.created_at, case.created_at);
        assert!(updated.updated_at >= case.updated_at);
    }

    #[tokio::test]
    async fn fails_on_missing_case() {
        let svc = fixture::service();
        let case_id = case::Id::new();

        let err = svc
            .execute(UpdateCase {
                case_id,
                number: case::Number::new("1").unwrap(),
                company: None,
                status: None,
                owner_id: user::Id::new(),
                address: case::Address::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::CaseNotExists(id) if *id == case_id,
        ));
    }
}
