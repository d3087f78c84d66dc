pub mod cli_args;
pub mod configuration;
pub mod export;
pub mod overview;
