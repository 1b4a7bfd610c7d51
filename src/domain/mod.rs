//! Domain Layer
//!
//! Pure logic for building the zeroconf table. File access goes through the
//! `FileSystem` port so the transformation can be tested in memory.
//!
//! ## Structure
//!
//! - `entities/` - Integration, Manifest, ValidationError, GeneratedFile
//! - `services/` - Zeroconf table/render, Differ
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
