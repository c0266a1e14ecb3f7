//! Domain models for the launch dashboard.
//!
//! # Core Concepts
//!
//! ## Loaded Once
//!
//! - [`LaunchRecord`]: One row of the launch CSV. Sites are a closed [`LaunchSite`]
//!   enumeration and outcomes are a binary [`Outcome`].
//!
//! ## Per Request
//!
//! These are rebuilt every time a control changes and never stored:
//!
//! - [`Selection`]: The dropdown and slider state ([`SiteFilter`] + [`PayloadRange`]).
//! - [`PieChart`] / [`ScatterChart`]: Derived tables behind the two charts.
//! - [`Controls`]: Dropdown options and slider bounds for the page.

mod chart;
mod controls;
mod launch;
mod selection;

pub use chart::*;
pub use controls::*;
pub use launch::*;
pub use selection::*;
