//! Shareable metadata for `webidl_core::lang` registries.
//!
//! These types are lightweight and `Copy` so registries can live in `const` tables.

/// Describe how well a vocabulary item is supported by the declaration backend.
///
/// ## Notes
/// - `Recognized` items are lexed and parsed, but the backend reports them as unsupported constructs.
///
/// ## Examples
/// ```rust
/// use webidl_core::lang::registry::Support;
///
/// let s = Support::Mapped;
/// assert_eq!(format!("{s:?}"), "Mapped");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Support {
    /// Fully mapped to TypeScript declarations.
    Mapped,
    /// Parsed, but has no declaration mapping.
    Recognized,
}

/// Represent a small WebIDL example snippet for documentation.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
