//! # gridmin Core Library
//!
//! Locates the most significant minima of a scalar field sampled on a 2D grid, such as a
//! potential-energy surface, while suppressing minima that are redundant with ones already found.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that data, algorithms and end-to-end
//! procedures stay separate and individually testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Grid`, `AxisSpec`), the analytic
//!   trial surfaces used to produce test fields, and archive/report I/O.
//!
//! - **[`engine`]: The Logic Core.** Exclusion policies and the iterative extraction routine
//!   itself, together with its configuration, progress reporting and error taxonomy.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into complete
//!   procedures: locating minima in an archived grid, or sampling a trial surface into one.

pub mod core;
pub mod engine;
pub mod workflows;
