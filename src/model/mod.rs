//! Core data model: the two categorical axes, the committed selection pair,
//! and the catalog record types mirroring the JSON data files.

pub mod scenario;
pub mod selection;

pub use scenario::{Scenario, Signal};
pub use selection::{Likelihood, Polarity, Selection, SelectionUpdate};
