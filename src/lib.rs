// src/lib.rs

//! Homework review status bot library.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
