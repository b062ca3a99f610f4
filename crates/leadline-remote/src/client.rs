//! HTTP client for the document-collection mirror API.

use chrono::{DateTime, Utc};
use leadline_core::{Condition, Error, LeadRecord, RemoteMirrorConfig, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The lead fields that are mirrored.
///
/// The local-only fields (`id`, `user_agent`) stay local; the server
/// assigns its own document id and creation time. `submitted_at` is the
/// client-side timestamp, kept as a backup alongside the server clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorEntry {
    /// Submitter's full name
    pub name: String,
    /// Submitter's email address
    pub email: String,
    /// Submitter's phone number
    pub phone: String,
    /// Selected condition, if any
    #[serde(default)]
    pub condition: Option<Condition>,
    /// Free-text message, if any
    #[serde(default)]
    pub message: Option<String>,
    /// Client-side submission timestamp
    pub submitted_at: DateTime<Utc>,
}

impl MirrorEntry {
    /// Projects a ledger record onto the mirrored field set.
    pub fn from_record(record: &LeadRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            condition: record.condition,
            message: record.message.clone(),
            submitted_at: record.timestamp,
        }
    }
}

/// One document as returned by the mirror's list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MirrorDocument {
    /// Server-assigned document id
    pub id: String,
    /// The mirrored lead fields
    pub data: MirrorEntry,
    /// Server-assigned creation time, when the server reports one
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<MirrorDocument>,
}

/// Client for the remote mirror.
///
/// Holds one `reqwest::Client`; cheap to clone. No retry or backoff:
/// callers either spawn writes fire-and-forget (the capture flow) or
/// surface the error inline (explicit admin reads).
#[derive(Debug, Clone)]
pub struct MirrorClient {
    http: reqwest::Client,
    config: RemoteMirrorConfig,
}

impl MirrorClient {
    /// Builds a client from the mirror configuration.
    pub fn new(config: RemoteMirrorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| Error::remote_with_source("failed to build HTTP client", err))?;
        Ok(Self { http, config })
    }

    /// The collection this client writes to.
    pub fn collection(&self) -> &str {
        &self.config.collection
    }

    /// URL of the documents endpoint for the configured collection.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/collections/{}/documents",
            self.config.base_url.trim_end_matches('/'),
            self.config.project_id,
            self.config.collection
        )
    }

    /// Appends one lead to the mirror collection.
    ///
    /// Returns the server-assigned document id.
    pub async fn create(&self, record: &LeadRecord) -> Result<String> {
        let entry = MirrorEntry::from_record(record);
        let response = self
            .http
            .post(self.documents_url())
            .bearer_auth(&self.config.api_key)
            .json(&entry)
            .send()
            .await
            .map_err(|err| Error::remote_with_source("mirror write failed", err))?
            .error_for_status()
            .map_err(|err| Error::remote_with_source("mirror rejected write", err))?;

        let created: CreateResponse = response
            .json()
            .await
            .map_err(|err| Error::remote_with_source("malformed mirror response", err))?;
        debug!(id = %created.id, collection = %self.config.collection, "lead mirrored");
        Ok(created.id)
    }

    /// Lists every document in the mirror collection.
    ///
    /// Sorted most-recent-first by the server creation time; documents
    /// without one sort last, keeping their returned order.
    pub async fn list_all(&self) -> Result<Vec<MirrorDocument>> {
        let response = self
            .http
            .get(self.documents_url())
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|err| Error::remote_with_source("mirror read failed", err))?
            .error_for_status()
            .map_err(|err| Error::remote_with_source("mirror rejected read", err))?;

        let listing: ListResponse = response
            .json()
            .await
            .map_err(|err| Error::remote_with_source("malformed mirror listing", err))?;

        let mut documents = listing.documents;
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use leadline_core::LeadId;

    fn config() -> RemoteMirrorConfig {
        RemoteMirrorConfig {
            base_url: "https://mirror.example/".to_string(),
            project_id: "clinic-prod".to_string(),
            api_key: "sekrit".to_string(),
            collection: "contact_messages".to_string(),
        }
    }

    fn record() -> LeadRecord {
        LeadRecord {
            id: LeadId::from_string("lead_1_abc"),
            name: "Priya".to_string(),
            email: "p@x.com".to_string(),
            phone: "+911234".to_string(),
            condition: Some(Condition::Keratoconus),
            message: None,
            timestamp: Utc::now(),
            user_agent: "leadline/0.1".to_string(),
        }
    }

    #[test]
    fn test_documents_url_shape() {
        let client = MirrorClient::new(config()).unwrap();
        assert_eq!(
            client.documents_url(),
            "https://mirror.example/projects/clinic-prod/collections/contact_messages/documents"
        );
    }

    #[test]
    fn test_mirror_entry_excludes_local_fields() {
        let entry = MirrorEntry::from_record(&record());
        let json = serde_json::to_value(&entry).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("user_agent"));
        assert_eq!(object["name"], "Priya");
        assert_eq!(object["condition"], "keratoconus");
        assert!(object.contains_key("submitted_at"));
    }

    #[test]
    fn test_listing_sorts_most_recent_first() {
        let now = Utc::now();
        let raw = serde_json::json!({
            "documents": [
                { "id": "a", "data": MirrorEntry::from_record(&record()),
                  "created_at": now - chrono::Duration::hours(2) },
                { "id": "b", "data": MirrorEntry::from_record(&record()),
                  "created_at": now },
                { "id": "c", "data": MirrorEntry::from_record(&record()) },
            ]
        });
        let listing: ListResponse = serde_json::from_value(raw).unwrap();
        let mut documents = listing.documents;
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
