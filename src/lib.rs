mod error;
pub use error::{EdgeLbError, Result};

mod config;
pub use config::Config;

pub mod marathon;

// Consumers bind to this name rather than to the generated module layout
pub use marathon::ServiceMarathon as ServiceSelector;

pub mod pipeline;
