pub mod candidate;
pub mod export;
pub mod interview;
pub mod job;
pub mod message;
