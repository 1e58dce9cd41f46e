// Patient Vitals Data
// This crate handles document storage for the patient vitals API

// Database configuration, pooling and migrations
pub mod database;

// Document store implementations
pub mod repository;

// Storage models
pub mod models;
