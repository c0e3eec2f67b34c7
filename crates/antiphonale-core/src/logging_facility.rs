//! Structured logging for the catalog
//!
//! One initialization point, `init(profile)`, plus three boundary macros:
//!
//! - `log_op_start!(op, ...)`
//! - `log_op_end!(op, duration_ms = ...)`
//! - `log_op_error!(op, err, duration_ms = ...)`
//!
//! Boundary events belong to the outermost layer (CLI commands, the store
//! repository). Kernel operations only emit `debug!` events.
//!
//! ```rust
//! use antiphonale_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
