//! The `Simple` record and its input/validation types.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted record. `id` is assigned by the store, strictly increasing and
/// never reused; `deleted_at` is null while the record is live.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Simple {
    pub id: i64,
    pub name: String,
    pub number: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Simple {
    /// A record is visible to reads and listings iff it has not been soft-deleted.
    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Untrusted create input as bound from a JSON body or urlencoded form.
/// Fields are optional here; semantic checks happen in [`SimpleInput::validate`].
#[derive(Debug, Default, Deserialize)]
pub struct SimpleInput {
    pub name: Option<String>,
    pub number: Option<i64>,
}

/// A create request that passed validation.
#[derive(Debug, Clone)]
pub struct NewSimple {
    pub name: String,
    pub number: i64,
}

impl SimpleInput {
    /// `name` must be present and non-empty; `number` must be present and
    /// non-zero (zero counts as missing, matching required-field semantics).
    pub fn validate(self) -> Result<NewSimple, AppError> {
        let name = match self.name {
            Some(n) if !n.is_empty() => n,
            _ => return Err(AppError::Validation("name is required".into())),
        };
        let number = match self.number {
            Some(n) if n != 0 => n,
            _ => return Err(AppError::Validation("number is required".into())),
        };
        Ok(NewSimple { name, number })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_name_and_nonzero_number() {
        let input = SimpleInput {
            name: Some("john".into()),
            number: Some(1234),
        };
        let new = input.validate().unwrap();
        assert_eq!(new.name, "john");
        assert_eq!(new.number, 1234);
    }

    #[test]
    fn validate_accepts_negative_number() {
        let input = SimpleInput {
            name: Some("SAM_01234".into()),
            number: Some(-123),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_name() {
        let input = SimpleInput {
            name: None,
            number: Some(1),
        };
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let input = SimpleInput {
            name: Some(String::new()),
            number: Some(1),
        };
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn validate_rejects_missing_number() {
        let input = SimpleInput {
            name: Some("john".into()),
            number: None,
        };
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn validate_rejects_zero_number() {
        let input = SimpleInput {
            name: Some("john".into()),
            number: Some(0),
        };
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }
}
