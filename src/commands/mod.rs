pub mod prune;
pub mod setup;
pub mod tree;
