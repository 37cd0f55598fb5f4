pub mod exchange;

pub use exchange::{ExchangeOutcome, ExchangeTelemetry};
