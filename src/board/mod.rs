//! Board layout: the foundation piles.

pub mod pile;

pub use pile::Pile;
