//! Integration seams with the (simulated) outside world.
//!
//! There is no server: [`auth::SimulatedAuthBackend`] stands in for one,
//! adding latency so loading states and cancellation are observable.

pub mod auth;
