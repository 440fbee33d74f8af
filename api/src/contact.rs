use serde::{Deserialize, Serialize};

use crate::collection;

// structs and types

// a single submission from the contact form
//
// the field names double as the column names in the remote messages table, so they
// must not be renamed without a matching migration on the store side
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// collections

collection!(Messages, ContactMessage);

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::store::RecordStore;

    #[derive(Default)]
    struct CapturingStore {
        inserted: RefCell<Vec<(String, Value)>>,
    }

    #[async_trait(?Send)]
    impl RecordStore for CapturingStore {
        async fn insert(&self, collection: &str, record: Value) -> anyhow::Result<()> {
            self.inserted
                .borrow_mut()
                .push((collection.to_owned(), record));
            Ok(())
        }
    }

    #[test]
    fn collection_name_is_snake_case() {
        assert_eq!(MESSAGES_COLLECTION, "messages");
    }

    #[test]
    fn default_message_serializes_four_empty_columns() {
        assert_eq!(
            serde_json::to_value(ContactMessage::default()).unwrap(),
            json!({"name": "", "email": "", "subject": "", "message": ""})
        );
    }

    #[tokio::test]
    async fn insert_sends_all_four_columns() {
        let store = CapturingStore::default();
        let msg = ContactMessage {
            name: "A".into(),
            email: "a@b.com".into(),
            subject: "Hi".into(),
            message: "Test".into(),
        };

        insert_messages(&store, &msg).await.unwrap();

        let inserted = store.inserted.borrow();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].0, "messages");
        assert_eq!(
            inserted[0].1,
            json!({"name": "A", "email": "a@b.com", "subject": "Hi", "message": "Test"})
        );
    }
}
