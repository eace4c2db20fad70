//! Employer↔candidate messaging threads.

pub mod handlers;
