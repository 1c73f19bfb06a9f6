pub mod acceptor;
pub mod fields;

pub use fields::SubmissionRequest;
