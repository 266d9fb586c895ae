//! Domain layer - the demo script and its collaborator contract

pub mod repository;
pub mod service;
pub mod transcript;

pub use repository::EmployeeRepository;
pub use service::{run_demo, DemoReport, FORCED_ID};
pub use transcript::{Transcript, TRANSCRIPT_TARGET};
