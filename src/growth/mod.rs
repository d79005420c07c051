mod fractal;

pub use fractal::{BranchParams, BranchKind, TreeElement, grow_tree};
