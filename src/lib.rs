//! MindNest client core: REST client, local persistence, chat view-model
//! and per-screen state for the MindNest support chat app.
//!
//! This library exposes modules for use in integration tests and by the
//! `mindnest` terminal client.

pub mod adapters;
pub mod api;
pub mod auth;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod preferences;
pub mod resources;
pub mod settings;
pub mod storage;
pub mod traits;
pub mod wellbeing;
