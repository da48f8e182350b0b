//! Host-side driver around the gesture detector.
//!
//! This crate plays the role firmware plays on the device: it owns the
//! polling cadence and the level sources, while all classification stays
//! in `tapline-gesture`. Levels come from scripted recordings instead of
//! GPIO reads, which makes whole gesture scenarios replayable in tests
//! and in the `demo` binary.

pub mod replay;
pub mod runner;
pub mod testlib;
