// src/reporting/mod.rs
//! Renderers for the pipeline's structured output.
//!
//! The engines return data; everything console- or JSON-shaped lives
//! here so the numeric pipeline can be tested without capturing stdout.

pub mod console;
pub mod json;
