//! Chart derivations.
//!
//! Both derivations are pure functions of the immutable [`LaunchTable`] and the
//! current control state, so handlers can call them on every request without
//! caching or locking.
//!
//! [`LaunchTable`]: crate::data::LaunchTable

mod figure;
mod payload_outcome;
mod site_success;

pub use figure::*;
pub use payload_outcome::payload_outcome;
pub use site_success::site_success;
