pub mod activity;
pub mod contact;
pub mod store;

// collection
//
// every remote collection the site writes to gets a typed insert helper generated here, so
// that callers never spell out collection names or serialize records by hand.  the store
// itself only ever sees json values
//
// collection!(Messages, ContactMessage) expands to
//
//   pub const MESSAGES_COLLECTION: &str = "messages";
//   pub async fn insert_messages(store, &ContactMessage) -> anyhow::Result<()>
#[macro_export]
macro_rules! collection {
    ($name:ident, $record:ty) => {
        paste::paste! {
            pub const [<$name:upper _COLLECTION>]: &str = stringify!([<$name:snake>]);

            pub async fn [<insert_ $name:snake>]<S: $crate::store::RecordStore + ?Sized>(
                store: &S,
                record: &$record,
            ) -> anyhow::Result<()> {
                let value = serde_json::to_value(record)?;

                store.insert([<$name:upper _COLLECTION>], value).await
            }
        }
    };
}
