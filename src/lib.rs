pub mod config;
pub mod db;
pub mod delivery;
pub mod domain;
pub mod metrics;
pub mod repository;
pub mod usecase;
