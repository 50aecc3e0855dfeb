pub mod generation;
pub mod idea;
pub mod outline;
pub mod schedule;
pub mod selection;
pub mod sessions;
