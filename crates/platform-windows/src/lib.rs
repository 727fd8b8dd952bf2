//! CamCheck Windows Platform Integration
//!
//! Windows gates camera use behind two Settings toggles rather than a
//! per-process consent prompt this tool could trigger. This crate ships
//! guidance capabilities pointing at those toggles.

pub mod permissions;

pub use permissions::*;
