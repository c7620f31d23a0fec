pub mod config;
pub mod logging;

pub mod fetch_head;
pub mod filename_guess;
pub mod path_model;
pub mod plan;
pub mod template;
