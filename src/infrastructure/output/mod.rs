//! Output infrastructure module

mod local;

pub use local::LocalOutputStore;
