//! Typed ID aliases for the directory entities.
//!
//! The schema uses plain SERIAL keys, so these are aliases rather than
//! wrapper types — they document intent at call sites (`&[OrganizationId]`
//! reads better than `&[i32]`) without ceremony around sqlx binding.

/// Key of an `organizations` row.
pub type OrganizationId = i32;

/// Key of a `buildings` row.
pub type BuildingId = i32;

/// Key of an `activities` row.
pub type ActivityId = i32;

/// Key of a `phones` row.
pub type PhoneId = i32;
