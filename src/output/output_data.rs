//! Output Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in output_operations.rs

use parking_lot::Mutex;
use std::io::Write;
use std::sync::atomic::AtomicUsize;

/// A writer shared by every worker of a team
pub struct SharedLineWriter<W: Write + Send> {
    pub(crate) inner: Mutex<W>,
    pub(crate) lines_written: AtomicUsize,
}
