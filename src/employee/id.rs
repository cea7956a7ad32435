//! Identifier generation for new records.

use uuid::Uuid;

/// Produces unique record identifiers.
///
/// Kept behind a trait so tests can substitute a predictable sequence.
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

/// Random v4 UUIDs in hyphenated lowercase form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_v4_uuids() {
        let id = UuidGenerator::new().generate_id();
        assert_eq!(id.len(), 36);

        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_ids_are_distinct() {
        let gen = UuidGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| gen.generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
