pub mod pricing;

pub use pricing::{CostRange, PricingConfig, PricingEngine};
