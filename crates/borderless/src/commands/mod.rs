pub mod debug;
pub mod demo;
pub mod init;
