pub mod config;
pub mod init;
pub mod presets;
pub mod progress;
pub mod run;
pub mod validate;
