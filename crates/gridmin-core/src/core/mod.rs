//! # Core Module
//!
//! Fundamental data structures and I/O for grid-sampled scalar fields.
//!
//! ## Architecture
//!
//! - **Grid Representation** ([`grid`]) - Equal-shaped coordinate and value arrays, axis
//!   specifications, and meshgrid sampling of arbitrary functions
//! - **Results** ([`record`]) - The immutable record of one located minimum
//! - **Trial Surfaces** ([`surfaces`]) - Closed-form 2D benchmark potentials with their
//!   documented minima
//! - **File I/O** ([`io`]) - Reading/writing `x`/`y`/`z` archives and serializing results
//!
//! Everything in this module is free of optimization state; the extraction algorithm that
//! consumes these types lives in [`crate::engine`].

pub mod grid;
pub mod io;
pub mod record;
pub mod surfaces;
