//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own storage concerns so route handlers can stay focused
//! on request parsing, status mapping, and rendering.

pub mod contact;
pub mod seed;
