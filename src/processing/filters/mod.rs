//! The individual normalization steps that make up the tidy transform.
//!
//! Each step is a standalone, total function over bytes. They are public so
//! callers can apply a subset, but [`tidy`](crate::processing::tidy) is the
//! only place that fixes their order.

mod bom;
mod line_endings;
mod whitespace;

pub use bom::strip_bom;
pub use line_endings::strip_carriage_returns;
pub use whitespace::{trim_surrounding_whitespace, trim_trailing_whitespace};
