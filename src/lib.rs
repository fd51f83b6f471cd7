//! Core for Mistake Mentor - an "analyze my mistake" assistant
//!
//! Builds mode- and language-aware analysis prompts from user text and/or
//! screenshots, submits them once to Gemini, and returns the markdown report.

pub mod ai;
pub mod app;
pub mod error;
pub mod input;
pub mod models;
pub mod prompts;
pub mod speech;

pub use error::{Error, Result};
