pub mod ai;
pub mod recommendation;
