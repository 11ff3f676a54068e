#[path = "support/fakes.rs"]
mod fakes;

pub use fakes::FakeLogSink;
