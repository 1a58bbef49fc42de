//! Infrastructure adapters for the player.

pub mod http_client;
