//! Builtin type vocabularies.
//!
//! This module defines registries for the builtin type names WebIDL knows about and how each one is spelled in
//! TypeScript.
//!
//! ## Notes
//! - These registries are vocabulary only: they define spellings + metadata, not mapping policy (nullability, array
//!   sugar and friends live in the backend's type mapper).
//!
//! ## See also
//! - [`crate::lang::keywords`] for reserved words

pub mod generics;
pub mod primitives;

pub use generics::{GENERIC_TYPES, GenericTypeId, GenericTypeInfo};
pub use primitives::{PRIMITIVE_TYPES, PrimitiveFamily, PrimitiveTypeId, PrimitiveTypeInfo};
