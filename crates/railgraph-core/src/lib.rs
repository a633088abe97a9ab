//! Railgraph Core Library
//!
//! Route index and search engine for small directed rail networks.

pub mod error;
pub mod format;
pub mod graph;
pub mod index;
pub mod logging;
