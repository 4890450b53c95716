//! Core type definitions for the Html tree.

pub mod attribute;
pub mod component;
pub mod node;
