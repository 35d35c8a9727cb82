//! SEED - Speculative Futures Platform (terminal edition)
//!
//! Browse pre-generated speculative-futures scenarios tagged by two
//! categorical axes (polarity, likelihood) and their supporting signals:
//! - Signal wheel: a mouse-driven two-ring radial selector
//! - Scenario catalog with filtering and random generation
//! - Event-driven ratatui host application

pub mod app;
pub mod catalog;
pub mod model;
pub mod wheel;

// Re-exports for convenience
pub use catalog::Catalog;
pub use model::{Likelihood, Polarity, Selection, SelectionUpdate};
pub use wheel::{SignalWheel, WheelConfig, WheelState};
