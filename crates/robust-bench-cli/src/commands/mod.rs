pub mod bench;
pub mod init_config;
