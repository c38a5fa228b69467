pub mod add;
pub mod apply;
pub mod config;
pub mod edit;
pub mod export;
pub mod forecast;
pub mod init;
pub mod list;
pub mod mark;
pub mod show;
