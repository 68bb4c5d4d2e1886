//! cashtrend-ingest: load day/balance CSV sources into delta series.

pub mod error;
pub mod loader;

pub use error::{LoadError, Result};
pub use loader::{load_series, read_series};
