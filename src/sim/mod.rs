//! Deterministic simulated game used by the CLI and the tests

pub mod farm;
pub mod host;
pub mod rod;

pub use farm::{SimFarm, ROD_SLOT};
pub use host::SimHost;
pub use rod::{SimCatch, SimRod};
