//! Embedded word sets
//!
//! Word sets compiled into the binary at build time.

// Include generated catalog from build script
include!(concat!(env!("OUT_DIR"), "/word_sets.rs"));
