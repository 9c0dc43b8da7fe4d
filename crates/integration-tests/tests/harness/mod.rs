//! Shared test harness: mock provider, config builder, test server

#![allow(dead_code)]

pub mod config;
pub mod mock_together;
pub mod server;
