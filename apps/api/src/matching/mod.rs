//! Job postings and candidate-matching views.

pub mod handlers;
pub mod scorer;
