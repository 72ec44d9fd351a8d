mod config;

// Re-export test fixtures
pub use config::*;
pub use inputs::*;
