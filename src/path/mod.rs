pub mod command;
pub mod geometry;
