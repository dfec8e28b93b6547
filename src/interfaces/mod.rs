//! Batch input and output for the command line.

pub mod csv;
