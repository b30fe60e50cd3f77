//! Interest Channels - survey interest extraction and channel materialization
//!
//! This crate turns a user's free-text survey answers into a short list of
//! interests, reconciles them with a fixed category taxonomy (fuzzy matching
//! plus an optional zero-shot classifier), and ensures a topical channel
//! exists for every interest.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
