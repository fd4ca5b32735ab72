use uuid::Uuid;

/// Source of laptop and image identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;

    fn is_valid(&self, id: &str) -> bool;
}

/// Random (v4) UUIDs in hyphenated form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn is_valid(&self, id: &str) -> bool {
        Uuid::parse_str(id).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_valid_and_distinct() {
        let ids = UuidIdGenerator;
        let first = ids.new_id();
        let second = ids.new_id();
        assert!(ids.is_valid(&first));
        assert_ne!(first, second);
    }

    #[test]
    fn test_rejects_non_uuid() {
        let ids = UuidIdGenerator;
        assert!(!ids.is_valid(""));
        assert!(!ids.is_valid("invalid-uuid"));
        assert!(ids.is_valid("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
    }
}
