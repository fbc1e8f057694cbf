pub mod algorithm;
pub mod ifs_config;
