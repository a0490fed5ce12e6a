//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PruneUseCase` - Validates the root job and builds its call tree
//! - `CleanUseCase` - Deletes job files outside the reachable set

pub mod clean;
pub mod prune;

pub use clean::{CleanAction, CleanOptions, CleanResult, CleanUseCase, FileOutcome};
pub use prune::{JobAnalysis, PruneUseCase};
