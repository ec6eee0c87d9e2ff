//! Domain Ports
//!
//! Interfaces the domain expects the outer layers to implement.

/// External provider ports
pub mod providers;
