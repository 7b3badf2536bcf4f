use std::sync::Arc;
use sendero_catalog::PricingEngine;
use sendero_core::{ReservationRepository, TravelAgent};
use sendero_order::{BookingService, ToolRegistry, TripSummarizer};
use crate::prompts::PromptBook;

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<BookingService>,
    pub summarizer: Arc<TripSummarizer>,
    pub tools: Arc<ToolRegistry>,
    pub agent: Arc<dyn TravelAgent>,
    pub prompts: Arc<PromptBook>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ReservationRepository>,
        pricing: PricingEngine,
        agent: Arc<dyn TravelAgent>,
        prompts: PromptBook,
    ) -> Self {
        let bookings = Arc::new(BookingService::new(repository.clone(), pricing));
        let summarizer = Arc::new(TripSummarizer::new(repository));
        let tools = Arc::new(ToolRegistry::new(bookings.clone(), summarizer.clone()));

        Self {
            bookings,
            summarizer,
            tools,
            agent,
            prompts: Arc::new(prompts),
        }
    }
}
