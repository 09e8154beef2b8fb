//! Position sources and the daily summary composer.
//!
//! Ecliptic longitudes are not computed here. They arrive through
//! [`PositionSource`] (synchronous, per body) or [`SnapshotProvider`]
//! (asynchronous, all bodies at once), and [`summarize`] turns them into
//! classified, rendered [`Summary`] values.

pub mod error;
pub mod source;
pub mod summary;
pub mod table;

pub use error::{SourceError, SummaryError};
pub use source::{PositionSource, SnapshotProvider};
pub use summary::{PositionRecord, Summary, SummaryOptions, render_line, summarize};
pub use table::LongitudeTable;
