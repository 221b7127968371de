//! Domain Layer
//!
//! Core types of the reconciliation pipeline, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Actions, revisions and locations
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
