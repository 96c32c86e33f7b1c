//! Application service layer - config and registry setup

pub mod config;
pub mod repository;
