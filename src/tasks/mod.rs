//! Background Tasks Module
//!
//! Houses the periodic expiry sweeper.

mod sweeper;

pub use sweeper::{spawn_sweeper, SweeperHandle};
