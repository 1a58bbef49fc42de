//! Ports for the player.

pub mod outbound;
