//! HTTP request handlers

pub mod emissions;
pub mod health;
