//! [`Command`] for deleting an [`AuctionRound`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{auction_round, AuctionRound},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting an [`AuctionRound`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteAuctionRound {
    /// ID of the [`AuctionRound`] to be deleted.
    pub auction_round_id: auction_round::Id,
}

impl<Db> Command<DeleteAuctionRound> for Service<Db>
where
    Db: Database<
            Select<By<Option<AuctionRound>, auction_round::Id>>,
            Ok = Option<AuctionRound>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<AuctionRound>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = AuctionRound;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteAuctionRound,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteAuctionRound { auction_round_id } = cmd;

        let round = self
            .database()
            .execute(Select(By::<Option<AuctionRound>, _>::new(
                auction_round_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AuctionRoundNotExists(auction_round_id))
            .map_err(tracerr::wrap!())?;

        self.database()
            .execute(Delete(round.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(round)
    }
}

/// Error of [`DeleteAuctionRound`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`AuctionRound`] with the provided ID does not exist.
    #[display("`AuctionRound(id: {_0})` does not exist")]
    AuctionRoundNotExists(#[error(not(source))] auction_round::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use crate::{
        command::{fixture, Command as _},
        query,
    };

    use super::{DeleteAuctionRound, ExecutionError};

    #[tokio::test]
    async fn keeps_other_rounds_as_is() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        _ = fixture::new_building_unit(
            &svc,
            case.id,
            fixture::holding("100", 1, 1),
        )
        .await;
        let first = fixture::new_auction_round(&svc, case.id, "3000000").await;
        let second =
            fixture::new_auction_round(&svc, case.id, "2400000").await;

        let deleted = svc
            .execute(DeleteAuctionRound {
                auction_round_id: first.id,
            })
            .await
            .unwrap();

        assert_eq!(deleted, first);
        assert_eq!(
            svc.execute(query::auction_rounds::ByCase::by(case.id))
                .await
                .unwrap(),
            vec![second],
        );
    }

    #[tokio::test]
    async fn fails_on_missing_round() {
        let svc = fixture::service();
        let case = fixture::new_case(&svc).await;
        let round = fixture::new_auction_round(&svc, case.id, "1000000").await;
        _ = svc
            .execute(DeleteAuctionRound {
                auction_round_id: round.id,
            })
            .await
            .unwrap();

        let err = svc
            .execute(DeleteAuctionRound {
                auction_round_id: round.id,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::AuctionRoundNotExists(id) if *id == round.id,
        ));
    }
}
