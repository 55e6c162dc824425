pub mod init;
pub mod writer;
