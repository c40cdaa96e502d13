//! [`Command`] for creating a new [`Survey`].

use common::{
    operations::{By, Insert, Select},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{case, survey, Case, Survey},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Survey`] to a [`Case`].
#[derive(Clone, Debug)]
pub struct CreateSurvey {
    /// ID of the [`Case`] a new [`Survey`] belongs to.
    pub case_id: case::Id,

    /// Notes of the first [`survey::Day`] of a new [`Survey`].
    pub first_day: Option<survey::Day>,

    /// Notes of the second [`survey::Day`] of a new [`Survey`].
    pub second_day: Option<survey::Day>,

    /// [`survey::Links`] of a new [`Survey`].
    pub links: survey::Links,
}

impl<Db> Command<CreateSurvey> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<Insert<Survey>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Survey;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateSurvey) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateSurvey {
            case_id,
            first_day,
            second_day,
            links,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let now = DateTime::now();
        let survey = Survey {
            id: survey::Id::new(),
            case_id,
            first_day,
            second_day,
            links,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(survey.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(survey)
    }
}

/// Error of [`CreateSurvey`] [`Command`] execution.
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
        domain::{case, survey},
        query,
    };

    use super::{CreateSurvey, ExecutionError};

    #[tokio::test]
    async fn adds_survey_to_case() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let survey = svc
            .execute(CreateSurvey {
                case_id: case.id,
                first_day: survey::Day::new("10/01 現場無人應門"),
                second_day: None,
                links: survey::Links {
                    announcement: survey::Link::new(
                        "https://aomp109.judicial.gov.tw/113-1234",
                    ),
                    ..survey::Links::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(survey.links.count(), 1);
        assert_eq!(
            svc.execute(query::surveys::ByCase::by(case.id))
                .await
                .unwrap(),
            vec![survey],
        );
    }

    #[tokio::test]
    async fn fails_on_missing_case() {
        let svc = fixture::service();

        let err = svc
            .execute(CreateSurvey {
                case_id: case::Id::new(),
                first_day: None,
                second_day: None,
                links: survey::Links::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::CaseNotExists(_)));
    }
}
