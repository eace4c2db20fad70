//! Interview scheduling between candidates and job postings.

pub mod handlers;
