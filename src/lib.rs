//! jobprune - call-graph based cleanup for robot job folders
//!
//! A job folder holds one text file per job. Jobs call each other with
//! `CALL JOB:<name>` lines. Starting from one root job, jobprune rebuilds
//! the call tree, prints it, and deletes every job file the root never
//! reaches.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CleanAction, CleanOptions, CleanResult, CleanUseCase, JobAnalysis, PruneUseCase,
};
pub use config::Config;
pub use domain::entities::{ChildMap, JobTree, ReachableSet};
pub use domain::services::{
    parse_directive, render_children, render_tree, BuildDiagnostic, GraphBuilder, TreeGlyphs,
};
pub use domain::value_objects::{JobFolder, JobName};
pub use error::{JobPruneError, JobPruneResult};
pub use infrastructure::LocalFs;
