pub mod json_text;
pub mod time_format;
