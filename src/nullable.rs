//! Null-safety helpers over `Option`.
//!
//! "Zero" means `T::default()`: `0`, `""`, `false`, an empty `Vec`. The
//! helpers that mention it ([`alter`], [`nullable_of`], [`is_empty`]) treat a
//! present zero value the same as an absent one.

/// Wrap a value as present.
pub fn pointer_of<T>(value: T) -> Option<T> {
    Some(value)
}

/// The value, or zero when absent.
pub fn safe_value<T: Clone + Default>(value: Option<&T>) -> T {
    value.cloned().unwrap_or_default()
}

/// The value, or `fallback` when absent.
pub fn value_of<T: Clone>(value: Option<&T>, fallback: T) -> T {
    value.cloned().unwrap_or(fallback)
}

/// The value, or `fallback` when absent or zero.
pub fn alter<T: Clone + Default + PartialEq>(value: Option<&T>, fallback: T) -> T {
    match value {
        Some(v) if *v != T::default() => v.clone(),
        _ => fallback,
    }
}

/// Collapse a present zero value to `None`.
pub fn nullable_of<T: Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

/// Whether the value is absent or zero.
pub fn is_empty<T: Default + PartialEq>(value: Option<&T>) -> bool {
    value.is_none_or(|v| *v == T::default())
}

/// Whether both are absent, or both present and equal.
pub fn is_same<T: PartialEq>(a: Option<&T>, b: Option<&T>) -> bool {
    a == b
}
