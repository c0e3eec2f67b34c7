pub mod delete;
pub mod init;
pub mod render;
pub mod schema;
pub mod seed;

use std::time::Instant;

use antiphonale_core::{log_op_end, log_op_error, log_op_start, ExError};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Run `f` between start and end boundary events for `op`
pub fn logged<T>(op: &'static str, f: impl FnOnce() -> Result<T, ExError>) -> Result<T, ExError> {
    let start = Instant::now();
    log_op_start!(op);
    let result = f();
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}
