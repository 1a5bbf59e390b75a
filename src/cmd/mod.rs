pub mod init;
pub mod pending;
pub mod root;
pub mod team;
pub mod types;
