//! Integration tests for athena-lite.
//!
//! These tests drive the public API end to end over a scripted fake
//! service; no AWS credentials or network access are required.

mod config;
mod result;
