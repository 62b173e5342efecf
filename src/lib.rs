//! Space Survivor: a top-down survival shooter.
//!
//! The library holds the whole simulation. The binary in `main.rs` only
//! polls the keyboard, calls [`compute::tick`] once per frame and draws the
//! resulting [`entities::RenderFeed`].

pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
