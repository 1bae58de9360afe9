//! memomail - In-memory notebook and mailing-list tools
//!
//! Two independent utilities: a notebook of tagged text notes with substring
//! search and in-place editing, and a mailing list that groups e-mail
//! addresses and resolves groups to recipient sets for a pluggable sender.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::MemomailError;
