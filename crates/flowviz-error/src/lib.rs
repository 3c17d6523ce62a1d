//! # flowviz-error
//!
//! Unified error handling for flowviz.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., BackendFailed, DecodeFailed)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use flowviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::BackendFailed, "dot exited with failure")
//!         .with_operation("backend::render_via_dot")
//!         .with_context("status", "exit status: 1"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible operations return `Result<T, flowviz_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Nothing in this system retries: every surfaced error is terminal

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using flowviz Error
pub type Result<T> = std::result::Result<T, Error>;
