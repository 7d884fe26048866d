//! Line-atomic output
//!
//! Workers share one writer. Each line is written under the writer lock as a
//! single `write_all`, so lines from different workers never interleave.

pub mod output_data;
pub mod output_operations;

pub use output_data::SharedLineWriter;
pub use output_operations::{create_line_writer, into_inner, lines_written, write_line};
