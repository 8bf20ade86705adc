//! # Workflows Module
//!
//! Top-level entry points that run complete procedures on top of [`crate::engine`] and
//! [`crate::core`].
//!
//! - **Locate Workflow** ([`locate`]) - Load a grid archive, validate the run parameters and
//!   extract its minima, optionally writing them out as CSV.
//! - **Sample Workflow** ([`sample`]) - Evaluate an analytic trial surface on a meshgrid and
//!   store it as a grid archive ready for [`locate`].
//!
//! Both report their phases through a [`crate::engine::progress::ProgressReporter`] so that
//! front-ends can render progress without the library depending on any UI crate.

pub mod locate;
pub mod sample;
