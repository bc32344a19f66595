pub mod assign_cmd;
pub mod base_commands;
pub mod completions_cmd;
pub mod report_format;
pub mod sheets_cmd;
