//! [`Command`] for creating a new [`LandParcel`].

use common::{
    operations::{By, Insert, Select},
    DateTime, Ping,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        case,
        holding::{RegistryUrl, Remark},
        land_parcel, Case, Holding, LandParcel,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`LandParcel`] of a [`Case`].
#[derive(Clone, Debug)]
pub struct CreateLandParcel {
    /// ID of the [`Case`] a new [`LandParcel`] belongs to.
    pub case_id: case::Id,

    /// [`land_parcel::Number`] of a new [`LandParcel`].
    pub land_number: Option<land_parcel::Number>,

    /// [`RegistryUrl`] of the transcript a new [`LandParcel`] is listed in.
    pub registry_url: Option<RegistryUrl>,

    /// [`Holding`] of a new [`LandParcel`].
    pub holding: Holding,

    /// [`Remark`] about a new [`LandParcel`].
    pub remark: Option<Remark>,
}

impl<Db> Command<CreateLandParcel> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<LandParcel>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = LandParcel;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateLandParcel,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateLandParcel {
            case_id,
            land_number,
            registry_url,
            holding,
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
        let mut parcel = LandParcel {
            id: land_parcel::Id::new(),
            case_id,
            land_number,
            registry_url,
            holding,
            remark,
            converted_area: Ping::ZERO,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };
        parcel.recompute();

        self.database()
            .execute(Insert(parcel.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(parcel)
    }
}

/// Error of [`CreateLandParcel`] [`Command`] execution.
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
    use common::Ping;

    use crate::{
        command::{fixture, Command as _},
        domain::case,
        query,
    };

    use super::{CreateLandParcel, ExecutionError};

    #[tokio::test]
    async fn derives_converted_area() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let parcel = svc
            .execute(CreateLandParcel {
                case_id: case.id,
                land_number: None,
                registry_url: None,
                holding: fixture::holding("100", 1, 2),
                remark: None,
            })
            .await
            .unwrap();

        assert_eq!(parcel.converted_area(), fixture::ping("15.13"));
        assert_eq!(
            svc.execute(query::land_parcel::ById::by(parcel.id))
                .await
                .unwrap(),
            Some(parcel),
        );
    }

    #[tokio::test]
    async fn zero_total_share_gives_zero_area() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let parcel = svc
            .execute(CreateLandParcel {
                case_id: case.id,
                land_number: None,
                registry_url: None,
                holding: fixture::holding("100", 1, 0),
                remark: None,
            })
            .await
            .unwrap();

        assert_eq!(parcel.converted_area(), Ping::ZERO);
    }

    #[tokio::test]
    async fn fails_on_missing_case_without_writing() {
        let svc = fixture::service();
        let case_id = case::Id::new();

        let err = svc
            .execute(CreateLandParcel {
                case_id,
                land_number: None,
                registry_url: None,
                holding: fixture::holding("100", 1, 1),
                remark: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::CaseNotExists(id) if *id == case_id,
        ));
        assert!(svc
            .execute(query::land_parcels::ByCase::by(case_id))
            .await
            .unwrap()
            .is_empty());
    }
}
