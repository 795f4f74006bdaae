//! Shared test doubles and utilities for the Ledgerly backend.

mod clock;
mod dispatch;
mod rng;

pub use clock::{FixedClock, fixed_now};
pub use dispatch::{FailingDispatcher, RecordingDispatcher};
pub use rng::SequenceTokenRng;
