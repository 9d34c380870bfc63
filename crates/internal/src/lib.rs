//! Internal utilities shared by the eccard member crates

pub mod constant_time;
