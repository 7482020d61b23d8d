//! AlgoForge - natural-language benchmark dispatcher
//!
//! Free-text task descriptions ("find shortest path in graph") are resolved
//! to one concrete algorithm implementation from a fixed catalog, executed
//! under instrumentation (wall-clock time, RSS delta), and reported as a
//! structured record. Execution faults are captured as data; nothing raised
//! by an algorithm body escapes `dispatch`.

pub mod catalog;
pub mod core;
pub mod engine;
pub mod families;
pub mod registry;
pub mod server;
