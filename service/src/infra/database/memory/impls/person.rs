//! [`Person`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{case, person, Person},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Select<By<Option<Person>, person::Id>>> for Memory {
    type Ok = Option<Person>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Person>, person::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.persons.get(by.value()).cloned())
    }
}

impl Database<Select<By<Vec<Person>, case::Id>>> for Memory {
    type Ok = Vec<Person>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Person>, case::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let case_id = by.into_inner();

        let state = self.state.read().await;
        let mut rows = state
            .persons
            .values()
            .filter(|r| r.case_id == case_id)
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|r| (r.created_at, r.id));
        Ok(rows)
    }
}

impl Database<Insert<Person>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(person): Insert<Person>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(person)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<Person>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(person): Update<Person>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        state
            .ensure_case(person.case_id, "persons")
            .map_err(tracerr::wrap!())?;
        _ = state.persons.insert(person.id, person);
        Ok(())
    }
}

impl Database<Delete<Person>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(person): Delete<Person>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        _ = state.persons.remove(&person.id);
        Ok(())
    }
}
