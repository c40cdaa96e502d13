//! [`Command`] for updating a [`ComparableProperty`].

use common::{
    operations::{By, Select, Update},
    Date, DateTime, Money, Ping,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{comparable_property, ComparableProperty},
    infra::{database, Database},
    read::bonus_adjustment::Rates,
    Service,
};

use super::Command;

/// [`Command`] for updating a [`ComparableProperty`].
///
/// All the editable fields are replaced with the provided ones, and the unit
/// price and adjusted value are derived again from the persisted bonuses.
#[derive(Clone, Debug)]
pub struct UpdateComparableProperty {
    /// ID of the [`ComparableProperty`] to be updated.
    pub comparable_id: comparable_property::Id,

    /// New [`comparable_property::Kind`] of the [`ComparableProperty`].
    pub kind: comparable_property::Kind,

    /// New [`comparable_property::Address`] of the [`ComparableProperty`].
    pub address: Option<comparable_property::Address>,

    /// New [`comparable_property::AttachmentUrl`] of the
    /// [`ComparableProperty`].
    pub attachment_url: Option<comparable_property::AttachmentUrl>,

    /// New age of the [`ComparableProperty`] in years.
    pub house_age: Decimal,

    /// New [`Date`] when the [`ComparableProperty`] was sold.
    pub transaction_date: Option<Date>,

    /// New [`comparable_property::FloorHeight`] of the
    /// [`ComparableProperty`].
    pub floor_height: Option<comparable_property::FloorHeight>,

    /// New total price of the [`ComparableProperty`].
    pub total_price: Money,

    /// New main build area of the [`ComparableProperty`].
    pub build_area: Ping,

    /// New additional build area of the [`ComparableProperty`].
    pub sub_build_area: Ping,
}

impl<Db> Command<UpdateComparableProperty> for Service<Db>
where
    Db: Database<
            Select<By<Option<ComparableProperty>, comparable_property::Id>>,
            Ok = Option<ComparableProperty>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Rates, comparable_property::Id>>,
            Ok = Rates,
            Err = Traced<database::Error>,
        > + Database<
            Update<ComparableProperty>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ComparableProperty;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateComparableProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateComparableProperty {
            comparable_id,
            kind,
            address,
            attachment_url,
            house_age,
            transaction_date,
            floor_height,
            total_price,
            build_area,
            sub_build_area,
        } = cmd;

        let mut comparable = self
            .database()
            .execute(Select(By::<Option<ComparableProperty>, _>::new(
                comparable_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ComparablePropertyNotExists(comparable_id))
            .map_err(tracerr::wrap!())?;

        let rates = self
            .database()
            .execute(Select(By::<Rates, _>::new(comparable_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        comparable.kind = kind;
        comparable.address = address;
        comparable.attachment_url = attachment_url;
        comparable.house_age = house_age;
        comparable.transaction_date = transaction_date;
        comparable.floor_height = floor_height;
        comparable.total_price = total_price;
        comparable.build_area = build_area;
        comparable.sub_build_area = sub_build_area;
        comparable.recompute(&rates);
        comparable.updated_at = DateTime::now().coerce();

        self.database()
            .execute(Update(comparable.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(comparable)
    }
}

/// Error of [`UpdateComparableProperty`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`ComparableProperty`] with the provided ID does not exist.
    #[display("`ComparableProperty(id: {_0})` does not exist")]
    ComparablePropertyNotExists(
        #[error(not(source))] comparable_property::Id,
    ),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::Rate;

    use crate::{
        command::{fixture, Command as _, CreateBonusAdjustment},
        domain::{comparable_property, ComparableProperty},
    };

    use super::{ExecutionError, UpdateComparableProperty};

    fn cmd(
        comparable: &ComparableProperty,
        total_price: &str,
    ) -> UpdateComparableProperty {
        UpdateComparableProperty {
            comparable_id: comparable.id,
            kind: comparable.kind,
            address: comparable.address.clone(),
            attachment_url: None,
            house_age: comparable.house_age,
            transaction_date: comparable.transaction_date,
            floor_height: None,
            total_price: fixture::money(total_price),
            build_area: comparable.build_area,
            sub_build_area: comparable.sub_build_area,
        }
    }

    #[tokio::test]
    async fn applies_persisted_bonuses() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let comparable =
            fixture::new_comparable(&svc, case.id, "3000000", "30").await;
        _ = svc
            .execute(CreateBonusAdjustment {
                comparable_id: comparable.id,
                inspector_id: None,
                rate: "0.1".parse::<Rate>().unwrap(),
                reason: None,
            })
            .await
            .unwrap();

        let updated =
            svc.execute(cmd(&comparable, "3600000")).await.unwrap();

        assert_eq!(updated.unit_price(), fixture::money("120000"));
        assert_eq!(updated.adjusted_value(), fixture::money("132000"));
    }

    #[tokio::test]
    async fn fails_on_missing_comparable() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let mut comparable =
            fixture::new_comparable(&svc, case.id, "1", "1").await;
        comparable.id = comparable_property::Id::new();

        let err = svc.execute(cmd(&comparable, "1")).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::ComparablePropertyNotExists(id)
                if *id == comparable.id,
        ));
    }
}
