pub mod commands;
pub mod relay;
