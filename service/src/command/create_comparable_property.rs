//! [`Command`] for creating a new [`ComparableProperty`].

use common::{
    operations::{By, Insert, Select},
    Date, DateTime, Money, Ping,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{case, comparable_property, Case, ComparableProperty},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`ComparableProperty`] of a [`Case`].
///
/// A new [`ComparableProperty`] has no bonuses, so its adjusted value equals
/// its unit price.
#[derive(Clone, Debug)]
pub struct CreateComparableProperty {
    /// ID of the [`Case`] a new [`ComparableProperty`] is compared with.
    pub case_id: case::Id,

    /// [`comparable_property::Kind`] of a new [`ComparableProperty`].
    pub kind: comparable_property::Kind,

    /// [`comparable_property::Address`] of a new [`ComparableProperty`].
    pub address: Option<comparable_property::Address>,

    /// [`comparable_property::AttachmentUrl`] of a new
    /// [`ComparableProperty`].
    pub attachment_url: Option<comparable_property::AttachmentUrl>,

    /// Age of a new [`ComparableProperty`] in years.
    pub house_age: Decimal,

    /// [`Date`] when a new [`ComparableProperty`] was sold.
    pub transaction_date: Option<Date>,

    /// [`comparable_property::FloorHeight`] of a new [`ComparableProperty`].
    pub floor_height: Option<comparable_property::FloorHeight>,

    /// Total price of a new [`ComparableProperty`].
    pub total_price: Money,

    /// Main build area of a new [`ComparableProperty`].
    pub build_area: Ping,

    /// Additional build area of a new [`ComparableProperty`].
    pub sub_build_area: Ping,
}

impl<Db> Command<CreateComparableProperty> for Service<Db>
where
    Db: Database<
            Select<By<Option<Case>, case::Id>>,
            Ok = Option<Case>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<ComparableProperty>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = ComparableProperty;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateComparableProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateComparableProperty {
            case_id,
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

        self.database()
            .execute(Select(By::<Option<Case>, _>::new(case_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CaseNotExists(case_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let now = DateTime::now();
        let mut comparable = ComparableProperty {
            id: comparable_property::Id::new(),
            case_id,
            kind,
            address,
            attachment_url,
            house_age,
            transaction_date,
            floor_height,
            total_price,
            build_area,
            sub_build_area,
            unit_price: Money::ZERO,
            adjusted_value: Money::ZERO,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };
        comparable.recompute(&[]);

        self.database()
            .execute(Insert(comparable.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(comparable)
    }
}

/// Error of [`CreateComparableProperty`] [`Command`] execution.
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
    use common::{Money, Ping};

    use crate::{
        command::{fixture, Command as _},
        domain::{case, comparable_property::Kind},
    };

    use super::{CreateComparableProperty, ExecutionError};

    fn cmd(
        case_id: case::Id,
        total_price: &str,
        build_area: &str,
        sub_build_area: &str,
    ) -> CreateComparableProperty {
        CreateComparableProperty {
            case_id,
            kind: Kind::Custom,
            address: None,
            attachment_url: None,
            house_age: fixture::decimal("30"),
            transaction_date: None,
            floor_height: None,
            total_price: fixture::money(total_price),
            build_area: fixture::ping(build_area),
            sub_build_area: fixture::ping(sub_build_area),
        }
    }

    #[tokio::test]
    async fn derives_unit_price_and_adjusted_value() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let comparable = svc
            .execute(cmd(case.id, "1000000", "30", "0"))
            .await
            .unwrap();

        assert_eq!(comparable.unit_price(), fixture::money("33333"));
        assert_eq!(comparable.adjusted_value(), comparable.unit_price());
    }

    #[tokio::test]
    async fn counts_sub_build_area_as_half() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let comparable = svc
            .execute(cmd(case.id, "1000000", "20", "20"))
            .await
            .unwrap();

        assert_eq!(comparable.unit_price(), fixture::money("33333"));
    }

    #[tokio::test]
    async fn zero_area_gives_zero_price() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;

        let comparable =
            svc.execute(cmd(case.id, "1000000", "0", "0")).await.unwrap();

        assert_eq!(comparable.build_area, Ping::ZERO);
        assert_eq!(comparable.unit_price(), Money::ZERO);
        assert_eq!(comparable.adjusted_value(), Money::ZERO);
    }

    #[tokio::test]
    async fn fails_on_missing_case() {
        let svc = fixture::service();

        let err = svc
            .execute(cmd(case::Id::new(), "1", "1", "0"))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::CaseNotExists(_)));
    }
}
