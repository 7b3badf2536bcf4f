use async_trait::async_trait;
use sendero_core::{CoreError, CoreResult, Reservation, ReservationRepository};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Reservations kept as a JSON array in a single file.
///
/// Appends rewrite the whole array through a temporary file and an atomic
/// rename, serialized by an in-process lock so concurrent bookings cannot
/// overwrite each other.
pub struct JsonFileReservationRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileReservationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw stored values, or `None` if the file has never been written.
    async fn read_values(&self) -> CoreResult<Option<Vec<Value>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::PersistenceError(format!(
                    "reading {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Some(Vec::new()));
        }

        serde_json::from_slice::<Vec<Value>>(&bytes)
            .map(Some)
            .map_err(|e| {
                CoreError::PersistenceError(format!(
                    "{} is not a JSON array of reservations: {}",
                    self.path.display(),
                    e
                ))
            })
    }

    async fn write_values(&self, values: &[Value]) -> CoreResult<()> {
        let persist_err = |e: std::io::Error| {
            CoreError::PersistenceError(format!("writing {}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(persist_err)?;
        }

        let body = serde_json::to_vec_pretty(values)
            .map_err(|e| CoreError::PersistenceError(e.to_string()))?;

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        tokio::fs::write(&tmp_path, body).await.map_err(persist_err)?;
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(persist_err)?;
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for JsonFileReservationRepository {
    async fn append(
        &self,
        reservation: &Reservation,
    ) -> CoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut values = self.read_values().await?.unwrap_or_default();
        let record = serde_json::to_value(reservation)
            .map_err(|e| CoreError::PersistenceError(e.to_string()))?;
        values.push(record);

        self.write_values(&values).await?;
        debug!("Appended {} to {} ({} records)", reservation.type_label(), self.path.display(), values.len());
        Ok(())
    }

    async fn load_all(&self) -> CoreResult<Vec<Reservation>> {
        let values = self
            .read_values()
            .await?
            .ok_or_else(|| CoreError::StoreMissing(self.path.display().to_string()))?;

        let reservations = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<Reservation>(value) {
                Ok(reservation) => Some(reservation),
                Err(e) => {
                    warn!("Skipping unreadable record #{} in {}: {}", index, self.path.display(), e);
                    None
                }
            })
            .collect();

        Ok(reservations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sendero_core::{HotelReservation, TripReservation, TripType};

    fn bus(from: &str, cost: u32) -> Reservation {
        Reservation::Trip(TripReservation {
            trip_type: TripType::Bus,
            departure: from.to_string(),
            destination: "Potosí".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
            cost,
        })
    }

    #[tokio::test]
    async fn test_append_creates_single_element_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileReservationRepository::new(dir.path().join("nested").join("trip.json"));

        repo.append(&bus("Sucre", 90)).await.unwrap();

        let raw: Vec<Value> = serde_json::from_slice(&std::fs::read(repo.path()).unwrap()).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0]["reservation_type"], "TripReservation");
        assert_eq!(repo.load_all().await.unwrap(), vec![bus("Sucre", 90)]);
    }

    #[tokio::test]
    async fn test_append_preserves_prior_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileReservationRepository::new(dir.path().join("trip.json"));
        let hotel = Reservation::Hotel(HotelReservation {
            checkin_date: NaiveDate::from_ymd_opt(2024, 11, 2).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
            hotel_name: "Hostal Colonial".to_string(),
            city: "Potosí".to_string(),
            cost: 600,
        });

        repo.append(&bus("Sucre", 90)).await.unwrap();
        repo.append(&hotel).await.unwrap();
        repo.append(&bus("Potosí", 120)).await.unwrap();

        let loaded = repo.load_all().await.unwrap();
        assert_eq!(loaded, vec![bus("Sucre", 90), hotel, bus("Potosí", 120)]);
        assert!(!dir.path().join("trip.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_load_missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileReservationRepository::new(dir.path().join("trip.json"));
        assert!(matches!(repo.load_all().await, Err(CoreError::StoreMissing(_))));
    }

    #[tokio::test]
    async fn test_undecodable_records_are_skipped_but_kept_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(&path, r#"[{"reservation_type": "TripReservation", "cost": 10}]"#).unwrap();
        let repo = JsonFileReservationRepository::new(&path);

        assert!(repo.load_all().await.unwrap().is_empty());

        repo.append(&bus("Oruro", 70)).await.unwrap();
        let raw: Vec<Value> = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0]["cost"], 10);
        assert_eq!(repo.load_all().await.unwrap(), vec![bus("Oruro", 70)]);
    }

    #[tokio::test]
    async fn test_non_array_store_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();
        let repo = JsonFileReservationRepository::new(&path);

        assert!(matches!(repo.load_all().await, Err(CoreError::PersistenceError(_))));
        assert!(matches!(repo.append(&bus("Oruro", 70)).await, Err(CoreError::PersistenceError(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"not": "an array"}"#);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let repo = std::sync::Arc::new(JsonFileReservationRepository::new(dir.path().join("trip.json")));

        let mut handles = Vec::new();
        for i in 0..20 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.append(&bus("Uyuni", 50 + i)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.load_all().await.unwrap().len(), 20);
    }
}
