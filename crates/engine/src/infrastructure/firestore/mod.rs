//! Firestore (hosted document database) adapter.

mod client;
mod codec;

pub use client::{
    FirestoreClient, FirestoreConfig, DEFAULT_FIRESTORE_BASE_URL, DEFAULT_FIRESTORE_DATABASE,
};
