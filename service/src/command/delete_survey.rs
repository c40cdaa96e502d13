//! [`Command`] for deleting a [`Survey`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{survey, Survey},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for removing a [`Survey`] from its case.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteSurvey {
    /// ID of the [`Survey`] to be deleted.
    pub survey_id: survey::Id,
}

impl<Db> Command<DeleteSurvey> for Service<Db>
where
    Db: Database<
            Select<By<Option<Survey>, survey::Id>>,
            Ok = Option<Survey>,
            Err = Traced<database::Error>,
        > + Database<Delete<Survey>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Survey;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteSurvey) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteSurvey { survey_id } = cmd;

        let survey = self
            .database()
            .execute(Select(By::<Option<Survey>, _>::new(survey_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::SurveyNotExists(survey_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(survey.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(survey)
    }
}

/// Error of [`DeleteSurvey`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Survey`] with the provided ID does not exist.
    #[display("`Survey(id: {_0})` does not exist")]
    SurveyNotExists(#[error(not(source))] survey::Id),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        command::{fixture, Command as _, CreateSurvey},
        domain::survey,
        query,
    };

    use super::{DeleteSurvey, ExecutionError};

    #[tokio::test]
    async fn keeps_other_surveys_as_is() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let mut surveys = Vec::new();
        for day in ["10/01", "10/08"] {
            surveys.push(
                svc.execute(CreateSurvey {
                    case_id: case.id,
                    first_day: survey::Day::new(day),
                    second_day: None,
                    links: survey::Links::default(),
                })
                .await
                .unwrap(),
            );
        }

        let deleted = svc
            .execute(DeleteSurvey {
                survey_id: surveys[0].id,
            })
            .await
            .unwrap();

        assert_eq!(deleted, surveys[0]);
        assert_eq!(
            svc.execute(query::surveys::ByCase::by(case.id))
                .await
                .unwrap(),
            vec![surveys[1].clone()],
        );
    }

    #[tokio::test]
    async fn fails_on_missing_survey() {
        let svc = fixture::service();

        let err = svc
            .execute(DeleteSurvey {
                survey_id: survey::Id::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::SurveyNotExists(_)));
    }
}
