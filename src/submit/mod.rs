//! Submission boundary for sending validated form data

mod client;
mod traits;

pub use client::SimulatedSubmitter;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
