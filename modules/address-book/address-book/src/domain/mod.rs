pub mod error;
pub mod geo;
pub mod proximity;
pub mod repo;
pub mod service;

#[cfg(test)]
mod service_test;
