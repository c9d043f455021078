//! Error types for the graph API.
//!
//! Configuration errors are rejected synchronously at the call site with no
//! partial mutation. Data-function failures are scoped to a single series and
//! a single tick; nothing here ever tears down the host process.

use crate::data::series::SeriesId;

/// Boxed error returned by a failing data function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A series capacity of zero was requested.
    #[error("capacity must be greater than zero")]
    InvalidCapacity,

    /// Pinned axis bounds with `min >= max`.
    #[error("pinned bounds require min < max (got {min}..{max})")]
    InvalidBounds { min: f64, max: f64 },

    /// A series handle that is not (or no longer) registered.
    #[error("unknown series {0}")]
    UnknownSeries(SeriesId),

    /// A color specification that could not be parsed.
    #[error("unrecognized color specification {0:?}")]
    InvalidColor(String),

    /// The data function bound to a series failed during a tick.
    #[error("data function for series {series} failed: {source}")]
    DataFn {
        series: SeriesId,
        #[source]
        source: BoxError,
    },
}
