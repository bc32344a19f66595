pub mod apportion;
pub mod assigner;
pub mod config;
pub mod pool;
pub mod report_types;
pub mod report_yaml;
pub mod rotation;
pub mod sampler;
pub mod workbook_reader;
pub mod workbook_writer;
