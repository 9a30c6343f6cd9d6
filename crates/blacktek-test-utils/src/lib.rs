//! Test helpers shared across Black Tek crates.

pub mod fixture;
pub mod session;
pub mod source;

pub use fixture::ConfigFixture;
pub use session::RecordingSession;
pub use source::StaticSource;
