use serde::{Deserialize, Serialize};
use rand::Rng;
use sendero_core::{CoreError, CoreResult, ReservationKind};

/// Inclusive bounds for a synthesized cost
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

impl CostRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, cost: u32) -> bool {
        (self.min..=self.max).contains(&cost)
    }
}

/// Placeholder price list, one range per reservation category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_flight")]
    pub flight: CostRange,
    #[serde(default = "default_bus")]
    pub bus: CostRange,
    #[serde(default = "default_hotel")]
    pub hotel: CostRange,
    #[serde(default = "default_restaurant")]
    pub restaurant: CostRange,
}

fn default_flight() -> CostRange { CostRange::new(200, 700) }
fn default_bus() -> CostRange { CostRange::new(50, 350) }
fn default_hotel() -> CostRange { CostRange::new(500, 1000) }
fn default_restaurant() -> CostRange { CostRange::new(100, 500) }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            flight: default_flight(),
            bus: default_bus(),
            hotel: default_hotel(),
            restaurant: default_restaurant(),
        }
    }
}

impl PricingConfig {
    pub fn range_for(&self, kind: ReservationKind) -> CostRange {
        match kind {
            ReservationKind::Flight => self.flight,
            ReservationKind::Bus => self.bus,
            ReservationKind::Hotel => self.hotel,
            ReservationKind::Restaurant => self.restaurant,
        }
    }
}

/// Draws a cost for each new booking. Quotes are random and not reproducible.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> CoreResult<Self> {
        for kind in [
            ReservationKind::Flight,
            ReservationKind::Bus,
            ReservationKind::Hotel,
            ReservationKind::Restaurant,
        ] {
            let range = config.range_for(kind);
            if range.min > range.max {
                return Err(CoreError::ValidationError(format!(
                    "{} cost range is empty: {} > {}",
                    kind, range.min, range.max
                )));
            }
        }
        Ok(Self { config })
    }

    pub fn range_for(&self, kind: ReservationKind) -> CostRange {
        self.config.range_for(kind)
    }

    /// Uniform draw from the category's inclusive range
    pub fn quote(&self, kind: ReservationKind) -> u32 {
        let range = self.config.range_for(kind);
        rand::thread_rng().gen_range(range.min..=range.max)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self { config: PricingConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let engine = PricingEngine::default();
        assert_eq!(engine.range_for(ReservationKind::Flight), CostRange::new(200, 700));
        assert_eq!(engine.range_for(ReservationKind::Bus), CostRange::new(50, 350));
        assert_eq!(engine.range_for(ReservationKind::Hotel), CostRange::new(500, 1000));
        assert_eq!(engine.range_for(ReservationKind::Restaurant), CostRange::new(100, 500));
    }

    #[test]
    fn test_quotes_stay_within_bounds() {
        let engine = PricingEngine::default();
        for _ in 0..500 {
            let cost = engine.quote(ReservationKind::Bus);
            assert!((50..=350).contains(&cost));
        }
    }

    #[test]
    fn test_single_point_range() {
        let config = PricingConfig {
            hotel: CostRange::new(750, 750),
            ..Default::default()
        };
        let engine = PricingEngine::new(config).unwrap();
        assert_eq!(engine.quote(ReservationKind::Hotel), 750);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = PricingConfig {
            restaurant: CostRange::new(500, 100),
            ..Default::default()
        };
        assert!(matches!(PricingEngine::new(config), Err(CoreError::ValidationError(_))));
    }
}
