// src/lib.rs

//! quakewatch library: feed registry, record classification and the render loop.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
