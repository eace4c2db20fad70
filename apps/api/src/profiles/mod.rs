//! Candidate profiles — creation, assessment submission, and the live and
//! print views of the narrated behavioural profile.

pub mod handlers;
pub mod snapshot;
