//! # Engine Module
//!
//! Implements the minima extraction engine: given a sampled scalar field and an optional
//! exclusion policy, it produces an ordered list of the field's most significant minima.
//!
//! ## Architecture
//!
//! - **Exclusion** ([`policy`]) - The redundancy criteria (spatial radius or value band) and
//!   the masking they apply to the working copy of the field
//! - **Extraction** ([`extraction`]) - The greedy mask-and-repeat search and the unfiltered
//!   top-k mode, unified behind [`extraction::extract`]
//! - **Configuration** ([`config`]) - Validated run parameters and their builder
//! - **Progress** ([`progress`]) - Callback-based progress events for front-ends
//! - **Errors** ([`error`]) - The engine error taxonomy
//!
//! ## Determinism
//!
//! Extraction is a pure function of its inputs. Ties between equal values are always broken
//! in favour of the point that comes first in row-major order, so repeated runs on the same
//! grid return identical results.

pub mod config;
pub mod error;
pub mod extraction;
pub mod policy;
pub mod progress;
