pub mod cli;
pub mod input;
pub mod render;
