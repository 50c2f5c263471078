#[allow(clippy::module_inception)]
mod prp;
pub use prp::PRP;
