//! Core logic for Blitz.
//!
//! The only contract-bearing component is [`digest`]: a pure mapping from
//! strings to fixed-length GoldenDAG tokens plus the process-wide seed token.
//! Everything else here builds response bodies around it. No I/O.

pub mod digest;
pub mod guard;
pub mod nbhs;
pub mod payload;
pub mod trace;
