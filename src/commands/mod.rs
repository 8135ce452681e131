pub mod init;
pub mod recommend;
