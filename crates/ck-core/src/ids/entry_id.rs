use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Opaque identifier of a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl_id!(EntryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntryId::from("entry-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"entry-1\"");
        assert_eq!(id.to_string(), "entry-1");
    }
}
