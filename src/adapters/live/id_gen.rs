//! Random instance-ID suffixes.

use uuid::Uuid;

/// Hyphenated random (v4) UUID; boxes directly as an `IdGenerator`.
#[must_use]
pub fn uuid_suffix() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
