//! Domain Services
//!
//! - `directive` - recognises `CALL JOB:` reference lines
//! - `graph_builder` - builds the job call tree from a job folder
//! - `tree_renderer` - draws the tree with box-drawing connectors

pub mod directive;
pub mod graph_builder;
pub mod tree_renderer;

pub use directive::{parse_directive, references, DEFAULT_DIRECTIVE};
pub use graph_builder::{BuildDiagnostic, BuildOutcome, GraphBuilder, Traversal};
pub use tree_renderer::{render_children, render_tree, TreeGlyphs};
