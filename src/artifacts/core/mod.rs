//! Core utilities and shared types
//!
//! This module contains configuration shared by the diff and merge engines.

pub mod config;
