use async_trait::async_trait;
use sendero_core::{CoreError, CoreResult, Reservation, ReservationRepository};
use tokio::sync::Mutex;

/// `None` models a store that has never been written.
#[derive(Default)]
pub struct MemoryRepository {
    pub records: Mutex<Option<Vec<Reservation>>>,
}

impl MemoryRepository {
    pub fn with_records(records: Vec<Reservation>) -> Self {
        Self { records: Mutex::new(Some(records)) }
    }

    pub async fn snapshot(&self) -> Option<Vec<Reservation>> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl ReservationRepository for MemoryRepository {
    async fn append(&self, reservation: &Reservation) -> CoreResult<()> {
        self.records
            .lock()
            .await
            .get_or_insert_with(Vec::new)
            .push(reservation.clone());
        Ok(())
    }

    async fn load_all(&self) -> CoreResult<Vec<Reservation>> {
        self.records
            .lock()
            .await
            .clone()
            .ok_or_else(|| CoreError::StoreMissing("memory".to_string()))
    }
}

pub struct FailingRepository;

#[async_trait]
impl ReservationRepository for FailingRepository {
    async fn append(&self, _reservation: &Reservation) -> CoreResult<()> {
        Err(CoreError::PersistenceError("disk full".to_string()))
    }

    async fn load_all(&self) -> CoreResult<Vec<Reservation>> {
        Err(CoreError::PersistenceError("disk full".to_string()))
    }
}
