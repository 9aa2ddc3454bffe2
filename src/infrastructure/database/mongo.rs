//! MongoDB document store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Bson};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde_json::{Number, Value};

use super::DatabaseConfig;
use crate::domain::{
    Collection, Document, DocumentStore, Filter, StoreError, StoreResult, StoreValue,
};

/// Document store backed by a MongoDB database
pub struct MongoDocumentStore {
    client: Client,
    db: Database,
}

impl MongoDocumentStore {
    /// Build a pooled client. Does not contact the server.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(backend_error)?;
        options.app_name = Some("aximoix-api".to_string());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.server_selection_timeout);
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.max_idle_time = Some(config.max_idle_time);

        let client = Client::with_options(options).map_err(backend_error)?;
        let db = client.database(&config.name);
        Ok(Self { client, db })
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<bson::Document> {
        self.db.collection(collection.name())
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> StoreResult<Option<Document>> {
        let found = self
            .collection(collection)
            .find_one(filter_to_bson(filter))
            .await
            .map_err(backend_error)?;
        Ok(found.map(document_from_bson))
    }

    async fn find_many(&self, collection: Collection, filter: &Filter) -> StoreResult<Vec<Document>> {
        let cursor = self
            .collection(collection)
            .find(filter_to_bson(filter))
            .await
            .map_err(backend_error)?;
        let docs: Vec<bson::Document> = cursor.try_collect().await.map_err(backend_error)?;
        Ok(docs.into_iter().map(document_from_bson).collect())
    }

    async fn insert_one(&self, collection: Collection, document: Document) -> StoreResult<String> {
        let result = self
            .collection(collection)
            .insert_one(document_to_bson(document))
            .await
            .map_err(backend_error)?;
        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(id) => id,
            other => other.to_string(),
        })
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> StoreResult<u64> {
        self.collection(collection)
            .count_documents(filter_to_bson(filter))
            .await
            .map_err(backend_error)
    }

    async fn count_by_name(&self, name: &str) -> StoreResult<u64> {
        self.db
            .collection::<bson::Document>(name)
            .count_documents(doc! {})
            .await
            .map_err(backend_error)
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.db.list_collection_names().await.map_err(backend_error)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(backend_error)
    }
}

fn backend_error(e: mongodb::error::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

// ── Conversions ────────────────────────────────────────────────

fn filter_to_bson(filter: &Filter) -> bson::Document {
    let mut out = bson::Document::new();
    for (field, value) in filter.clauses() {
        out.insert(field.clone(), json_to_bson(value.clone()));
    }
    out
}

fn document_to_bson(document: Document) -> bson::Document {
    let mut out = bson::Document::new();
    for (key, value) in document {
        out.insert(key, value_to_bson(value));
    }
    out
}

fn value_to_bson(value: StoreValue) -> Bson {
    match value {
        StoreValue::Identifier(hex) => match ObjectId::parse_str(&hex) {
            Ok(oid) => Bson::ObjectId(oid),
            Err(_) => Bson::String(hex),
        },
        StoreValue::Timestamp(ts) => {
            Bson::DateTime(bson::DateTime::from_millis(ts.timestamp_millis()))
        }
        StoreValue::Scalar(scalar) => json_to_bson(scalar),
        StoreValue::Mapping(doc) => Bson::Document(document_to_bson(doc)),
        StoreValue::Sequence(items) => Bson::Array(items.into_iter().map(value_to_bson).collect()),
    }
}

fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => number_to_bson(&n),
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => {
            let mut out = bson::Document::new();
            for (key, value) in map {
                out.insert(key, json_to_bson(value));
            }
            Bson::Document(out)
        }
    }
}

fn number_to_bson(n: &Number) -> Bson {
    if let Some(i) = n.as_i64() {
        Bson::Int64(i)
    } else {
        Bson::Double(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn document_from_bson(document: bson::Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, value_from_bson(value)))
        .collect()
}

fn value_from_bson(value: Bson) -> StoreValue {
    match value {
        Bson::ObjectId(oid) => StoreValue::Identifier(oid.to_hex()),
        Bson::DateTime(dt) => match DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()) {
            Some(ts) => StoreValue::Timestamp(ts),
            None => StoreValue::Scalar(Value::from(dt.timestamp_millis())),
        },
        Bson::Document(doc) => StoreValue::Mapping(document_from_bson(doc)),
        Bson::Array(items) => StoreValue::Sequence(items.into_iter().map(value_from_bson).collect()),
        Bson::String(s) => StoreValue::Scalar(Value::String(s)),
        Bson::Boolean(b) => StoreValue::Scalar(Value::Bool(b)),
        Bson::Null => StoreValue::Scalar(Value::Null),
        Bson::Int32(i) => StoreValue::Scalar(Value::from(i)),
        Bson::Int64(i) => StoreValue::Scalar(Value::from(i)),
        Bson::Double(f) => StoreValue::Scalar(
            Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        ),
        other => StoreValue::Scalar(other.into_relaxed_extjson()),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn native_types_map_to_tagged_kinds() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let raw = doc! {
            "_id": oid,
            "created_at": bson::DateTime::from_millis(1_715_938_200_000),
            "features": ["a", "b"],
            "detailed_info": { "overview": "x" },
            "count": 3_i32,
        };

        let doc = document_from_bson(raw);
        assert_eq!(
            doc.get("_id"),
            Some(&StoreValue::Identifier("65a1f0c2e4b0a1b2c3d4e5f6".into()))
        );
        assert_eq!(
            doc.get("created_at"),
            Some(&StoreValue::Timestamp(
                Utc.timestamp_millis_opt(1_715_938_200_000).unwrap()
            ))
        );
        assert!(matches!(doc.get("features"), Some(StoreValue::Sequence(items)) if items.len() == 2));
        assert!(matches!(doc.get("detailed_info"), Some(StoreValue::Mapping(_))));
        assert_eq!(doc.get("count"), Some(&StoreValue::Scalar(json!(3))));
        assert_eq!(
            doc.keys().collect::<Vec<_>>(),
            vec!["_id", "created_at", "features", "detailed_info", "count"]
        );
    }

    #[test]
    fn unrecognized_types_pass_through_as_extended_json() {
        let value = value_from_bson(Bson::Binary(bson::Binary {
            subtype: bson::spec::BinarySubtype::Generic,
            bytes: vec![1, 2, 3],
        }));
        assert!(matches!(value, StoreValue::Scalar(Value::Object(_))));
    }

    #[test]
    fn timestamps_are_written_natively() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut doc = Document::new();
        doc.insert("created_at", StoreValue::Timestamp(ts));
        doc.insert("status", StoreValue::text("new"));

        let out = document_to_bson(doc);
        assert_eq!(
            out.get("created_at"),
            Some(&Bson::DateTime(bson::DateTime::from_millis(ts.timestamp_millis())))
        );
        assert_eq!(out.get_str("status").unwrap(), "new");
    }

    #[test]
    fn contact_timestamp_survives_the_store_unchanged() {
        use crate::domain::{ContactSubmission, NewContactSubmission};

        let submission = ContactSubmission::from_new(NewContactSubmission {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            service_interest: None,
            message: "Hello".into(),
        });

        let stored = document_from_bson(document_to_bson(submission.to_document()));
        assert_eq!(
            stored.get("created_at"),
            Some(&StoreValue::Timestamp(submission.created_at))
        );
    }

    #[test]
    fn filters_become_equality_documents() {
        let filter = Filter::all().eq("id", "1").eq("is_active", true);
        assert_eq!(filter_to_bson(&filter), doc! { "id": "1", "is_active": true });
    }
}
