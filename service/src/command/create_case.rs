//! [`Command`] for creating a new [`Case`].

use common::{operations::Insert, DateTime};
use tracerr::Traced;

use crate::{
    domain::{case, user, Case},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Case`].
#[derive(Clone, Debug)]
pub struct CreateCase {
    /// [`case::Number`] of a new [`Case`].
    pub number: case::Number,

    /// [`case::Company`] handling a new [`Case`].
    pub company: Option<case::Company>,

    /// [`case::Status`] of a new [`Case`].
    pub status: Option<case::Status>,

    /// ID of the [`user`] owning a new [`Case`].
    pub owner_id: user::Id,

    /// [`case::Address`] of a new [`Case`].
    pub address: case::Address,
}

impl<Db> Command<CreateCase> for Service<Db>
where
    Db: Database<Insert<Case>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Case;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateCase) -> Result<Self::Ok, Self::Err> {
        let CreateCase {
            number,
            company,
            status,
            owner_id,
            address,
        } = cmd;

        let now = DateTime::now();
        let case = Case {
            id: case::Id::new(),
            number,
            company,
            status,
            owner_id,
            address,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(case.clone()))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(case)
    }
}

/// Error of [`CreateCase`] [`Command`] execution.
pub type ExecutionError = database::Error;
