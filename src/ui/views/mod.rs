pub mod clean;
pub mod tree;
