// Library for tests to access modules

pub mod cadvisor_repo;
pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod time;
pub mod version;
