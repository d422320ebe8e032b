//! Core use-case services.
//!
//! # Responsibility
//! - Drive list transitions from user intents.
//! - Keep view layers decoupled from storage details.

pub mod task_controller;
