//! Common test utilities for airweather.
//!
//! This module provides shared utilities for testing the airweather server.

#![allow(dead_code)]

pub mod assertions;
pub mod http_client;
pub mod server;
