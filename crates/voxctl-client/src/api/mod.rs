//! API endpoint implementations.

mod agents;
mod voices;

pub use agents::AgentsApi;
pub use voices::VoicesApi;
