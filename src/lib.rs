//! Preference Graph - Attribute-similarity preference recommendations
//!
//! This crate loads user preference rows into a Neo4j graph and recommends
//! preferences for a new user by counting what similar users prefer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
