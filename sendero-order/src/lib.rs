pub mod booking;
pub mod summary;
pub mod tools;

#[cfg(test)]
mod test_support;

pub use booking::BookingService;
pub use summary::{render_summary, TripSummarizer, TripSummary};
pub use tools::{ToolCall, ToolDefinition, ToolRegistry, ToolResult};
