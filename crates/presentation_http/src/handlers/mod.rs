//! HTTP request handlers

pub mod docs;
pub mod hello;
