//! Use case orchestration for posture.
//!
//! This crate provides the application layer: it coordinates settings,
//! signals, and the domain engine, and owns the emitted envelope. It is
//! intentionally thin; the CLI crate on top of it only handles argument
//! parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{run_capability, verdict_exit_code, CheckInput, CheckOutput};
pub use render::{render_markdown, serialize_report};
