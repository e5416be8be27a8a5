//! Clusterfall (workspace facade crate).
//!
//! This package keeps a single `clusterfall::{core,engine,feed,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use clusterfall_core as core;
pub use clusterfall_engine as engine;
pub use clusterfall_feed as feed;
pub use clusterfall_input as input;
pub use clusterfall_term as term;
pub use clusterfall_types as types;
