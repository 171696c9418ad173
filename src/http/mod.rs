//! HTTP layer for the geocoding/routing proxy

pub mod client;

pub use client::HttpClient;
