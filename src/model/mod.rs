pub mod init_lua;
pub mod languages;
pub mod layout;
