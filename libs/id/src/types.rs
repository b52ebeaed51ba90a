//! Typed ID definitions for platform diagnostics and correlation.
//!
//! Each ID type has a unique prefix that identifies what the ID refers to.
//! IDs are sortable-identifier-based, so they order by creation time.

use crate::define_id;

// =============================================================================
// Diagnostics
// =============================================================================

define_id!(ErrorId, "error");
define_id!(JobId, "job");

// =============================================================================
// Correlation
// =============================================================================

define_id!(RequestId, "req");
define_id!(SessionId, "sess");

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_error_id_roundtrip() {
        let id = ErrorId::new();
        let s = id.to_string();
        let parsed: ErrorId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_error_id_prefix() {
        let id = ErrorId::new();
        assert!(id.to_string().starts_with("error_"));
    }

    #[test]
    fn test_error_id_known_text() {
        let id = ErrorId::parse("error_01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap();
        assert_eq!(id.to_string(), "error_01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert_eq!(id.ulid().to_string(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    }

    #[test]
    fn test_error_id_prefix_mismatch() {
        let result: Result<ErrorId, _> = "wrong_01ARZ3NDEKTSV4RRFFQ69G5FAV".parse();
        let err = result.unwrap_err();
        assert!(err.is_prefix_error());
        assert!(matches!(
            err,
            crate::IdError::PrefixMismatch {
                expected: "error",
                ..
            }
        ));
    }

    #[test]
    fn test_error_id_missing_separator() {
        let result: Result<ErrorId, _> = "error01ARZ3NDEKTSV4RRFFQ69G5FAV".parse();
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::MissingSeparator
        ));
    }

    #[test]
    fn test_error_id_empty() {
        let result: Result<ErrorId, _> = "".parse();
        assert!(matches!(result.unwrap_err(), crate::IdError::Empty));
    }

    #[test]
    fn test_error_id_invalid_ulid() {
        let result: Result<ErrorId, _> = "error_invalid".parse();
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::InvalidUlid(chron_ulid::UlidError::InvalidLength { .. })
        ));

        let result: Result<ErrorId, _> = "error_!1ARZ3NDEKTSV4RRFFQ69G5FAV".parse();
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::InvalidUlid(chron_ulid::UlidError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_types_do_not_cross_parse() {
        let id = RequestId::new();
        let result: Result<SessionId, _> = id.to_string().parse();
        assert!(result.unwrap_err().is_prefix_error());
    }

    #[test]
    fn test_try_parse_folds_failures() {
        assert!(ErrorId::try_parse("error_01ARZ3NDEKTSV4RRFFQ69G5FAV").is_some());
        assert!(ErrorId::try_parse("wrong_01ARZ3NDEKTSV4RRFFQ69G5FAV").is_none());
    }

    #[test]
    fn test_error_id_json_roundtrip() {
        let id = ErrorId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ErrorId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_request_id_sortable() {
        let id1 = RequestId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = RequestId::new();
        // IDs are time-ordered, so id1 < id2
        assert!(id1 < id2);
    }

    #[test]
    fn test_all_id_prefixes_unique() {
        // Ensure all prefixes are unique
        let prefixes = vec![
            ErrorId::PREFIX,
            JobId::PREFIX,
            RequestId::PREFIX,
            SessionId::PREFIX,
        ];

        let unique: std::collections::HashSet<_> = prefixes.iter().collect();
        assert_eq!(prefixes.len(), unique.len(), "Duplicate ID prefixes found!");
    }

    proptest! {
        #[test]
        fn prop_any_ulid_roundtrips_through_prefix(bytes in any::<[u8; 16]>()) {
            let ulid = chron_ulid::Ulid::from_byte_array(bytes);
            let id = ErrorId::from_ulid(ulid);
            let parsed = ErrorId::parse(&id.to_string()).unwrap();
            prop_assert_eq!(parsed, id);
            prop_assert_eq!(parsed.ulid(), ulid);
        }
    }
}
