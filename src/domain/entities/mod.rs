//! Domain Entities

mod job_tree;

pub use job_tree::{ChildMap, JobTree, ReachableSet, VisitedSet};
