//! Test infrastructure for the schema manager.
//!
//! - [`RecordingExecutor`] captures statements instead of sending them, so
//!   statement generation can be checked without a server.
//! - [`MySQLContainer`] runs a throwaway MySQL server in Docker for
//!   end-to-end tests.

pub mod container;
pub mod recording;

pub use container::MySQLContainer;
pub use recording::RecordingExecutor;
