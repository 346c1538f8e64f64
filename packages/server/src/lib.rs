// Mergington High School Activities - API Core
//
// This crate provides the backend API for extracurricular activity signups:
// listing activities, registering a student's email, and removing it.
// The roster lives in memory for the life of the process.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
