use sendero_core::{CoreResult, Reservation, ReservationRepository};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Activity {
    pub activity: String,
    pub date: String,
    pub details: Reservation,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationGroup {
    pub location: String,
    pub activities: Vec<Activity>,
}

/// Reservations grouped by location, groups in first-seen order and
/// activities in insertion order within each group.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripSummary {
    pub groups: Vec<LocationGroup>,
    pub total_cost: u64,
}

impl TripSummary {
    pub fn from_reservations(reservations: &[Reservation]) -> Self {
        let mut groups: Vec<LocationGroup> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut total_cost: u64 = 0;

        for reservation in reservations {
            total_cost += u64::from(reservation.cost());

            let location = reservation.location();
            let slot = *index.entry(location).or_insert_with(|| {
                groups.push(LocationGroup {
                    location: location.to_string(),
                    activities: Vec::new(),
                });
                groups.len() - 1
            });

            groups[slot].activities.push(Activity {
                activity: reservation.type_label().to_string(),
                date: reservation.date_label(),
                details: reservation.clone(),
            });
        }

        Self { groups, total_cost }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Trip Summary:\n\n");

        for group in &self.groups {
            let _ = writeln!(out, "City: {}", group.location);
            for activity in &group.activities {
                let details = serde_json::to_string_pretty(&activity.details).unwrap_or_default();
                let _ = writeln!(out, "  - Activity: {}", activity.activity);
                let _ = writeln!(out, "    Date: {}", activity.date);
                let _ = writeln!(out, "    Details: {}", details);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "Total Cost: ${:.2}", self.total_cost as f64);
        out
    }
}

pub fn render_summary(reservations: &[Reservation]) -> String {
    TripSummary::from_reservations(reservations).render()
}

/// Reads the whole reservation store and reports on it.
pub struct TripSummarizer {
    repository: Arc<dyn ReservationRepository>,
}

impl TripSummarizer {
    pub fn new(repository: Arc<dyn ReservationRepository>) -> Self {
        Self { repository }
    }

    pub async fn summarize_structured(&self) -> CoreResult<TripSummary> {
        let reservations = self.repository.load_all().await?;
        let summary = TripSummary::from_reservations(&reservations);
        info!(
            "Summarized {} reservations across {} locations (total {})",
            reservations.len(),
            summary.groups.len(),
            summary.total_cost
        );
        Ok(summary)
    }

    /// Plain-text report; fails with `StoreMissing` if nothing was ever booked.
    pub async fn summarize(&self) -> CoreResult<String> {
        Ok(self.summarize_structured().await?.render())
    }
}
