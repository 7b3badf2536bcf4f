use async_trait::async_trait;
use crate::reservation::Reservation;
use crate::CoreResult;

/// Append-only store of reservation records
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Add one record after every record already stored. Prior records must survive unchanged.
    async fn append(
        &self,
        reservation: &Reservation,
    ) -> CoreResult<()>;

    /// All stored records in insertion order.
    async fn load_all(&self) -> CoreResult<Vec<Reservation>>;
}
