//! Profile export — print snapshot → external PDF renderer → S3.

pub mod handlers;
pub mod renderer;
