//! Output: the file sink plus text and JSON summaries

pub mod file;
pub mod json;
pub mod text;
