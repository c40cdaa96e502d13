//! [`Command`] for updating a [`Survey`].

use common::{
    operations::{By, Select, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{survey, Survey},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`Survey`].
#[derive(Clone, Debug)]
pub struct UpdateSurvey {
    /// ID of the [`Survey`] to be updated.
    pub survey_id: survey::Id,

    /// New notes of the first [`survey::Day`] of the [`Survey`].
    pub first_day: Option<survey::Day>,

    /// New notes of the second [`survey::Day`] of the [`Survey`].
    pub second_day: Option<survey::Day>,

    /// New [`survey::Links`] of the [`Survey`].
    pub links: survey::Links,
}

impl<Db> Command<UpdateSurvey> for Service<Db>
where
    Db: Database<
            Select<By<Option<Survey>, survey::Id>>,
            Ok = Option<Survey>,
            Err = Traced<database::Error>,
        > + Database<Update<Survey>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Survey;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateSurvey) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateSurvey {
            survey_id,
            first_day,
            second_day,
            links,
        } = cmd;

        let mut survey = self
            .database()
            .execute(Select(By::<Option<Survey>, _>::new(survey_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::SurveyNotExists(survey_id))
            .map_err(tracerr::wrap!())?;

        survey.first_day = first_day;
        survey.second_day = second_day;
        survey.links = links;
        survey.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(survey.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(survey)
    }
}

/// Error of [`UpdateSurvey`] [`Command`] execution.
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
    };

    use super::{ExecutionError, UpdateSurvey};

    #[tokio::test]
    async fn replaces_survey_notes() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let survey = svc
            .execute(CreateSurvey {
                case_id: case.id,
                first_day: survey::Day::new("10/01 現場無人應門"),
                second_day: None,
                links: survey::Links::default(),
            })
            .await
            .unwrap();

        let updated = svc
            .execute(UpdateSurvey {
                survey_id: survey.id,
                first_day: survey.first_day.clone(),
                second_day: survey::Day::new("10/08 管理員告知已空屋"),
                links: survey::Links {
                    photos: survey::Link::new("https://photos.example.com/1"),
                    ..survey::Links::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.first_day, survey.first_day);
        assert_eq!(
            updated.second_day.as_ref().map(AsRef::as_ref),
            Some("10/08 管理員告知已空屋"),
        );
        assert_eq!(updated.links.count(), 1);
        assert_eq!(updated.case_id, case.id);
    }

    #[tokio::test]
    async fn fails_on_missing_survey() {
        let svc = fixture::service();

        let err = svc
            .execute(UpdateSurvey {
                survey_id: survey::Id::new(),
                first_day: None,
                second_day: None,
                links: survey::Links::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::SurveyNotExists(_)));
    }
}
