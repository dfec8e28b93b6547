pub mod operation_reader;
pub mod result_writer;
