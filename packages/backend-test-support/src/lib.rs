//! Backend test support utilities
//!
//! Logging bootstrap, unique test data and Problem Details assertions shared
//! by the backend's unit and integration tests.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
