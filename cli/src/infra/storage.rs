//! Cloud Storage adapter for the staging bucket.

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::application::ports::{BucketCreation, StagingStore};
use crate::domain::deploy::gcs_uri;
use crate::domain::resource::encode_query_value;
use crate::infra::http::GoogleClient;

const STORAGE_API: &str = "https://storage.googleapis.com/storage/v1";
const UPLOAD_API: &str = "https://storage.googleapis.com/upload/storage/v1";

pub struct GcsStagingStore {
    http: GoogleClient,
    project: String,
}

impl GcsStagingStore {
    #[must_use]
    pub fn new(http: GoogleClient, project: &str) -> Self {
        Self {
            http,
            project: project.to_string(),
        }
    }
}

impl StagingStore for GcsStagingStore {
    fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        let url = format!("{STORAGE_API}/b/{}", encode_query_value(bucket));
        match self.http.get_json::<Value>(&url) {
            Ok(_) => Ok(true),
            Err(e) if e.status() == Some(404) => Ok(false),
            Err(e) if e.status() == Some(403) => Err(anyhow::Error::new(e).context(format!(
                "permission denied accessing bucket '{bucket}'. Required permissions: \
                 storage.buckets.get, storage.buckets.create, storage.buckets.update"
            ))),
            Err(e) => {
                Err(anyhow::Error::new(e).context(format!("confirming staging bucket '{bucket}'")))
            }
        }
    }

    fn create_bucket(&self, bucket: &str) -> Result<BucketCreation> {
        let url = format!("{STORAGE_API}/b?project={}", encode_query_value(&self.project));
        let body = json!({
            "name": bucket,
            "iamConfiguration": {
                "uniformBucketLevelAccess": { "enabled": true },
                "publicAccessPrevention": "enforced",
            },
        });
        match self.http.send_json::<_, Value>("POST", &url, &body) {
            Ok(_) => Ok(BucketCreation::Created),
            Err(e) if e.status() == Some(409) => Ok(BucketCreation::AlreadyExists),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("failed to create staging bucket '{bucket}'"))),
        }
    }

    fn upload(
        &self,
        bucket: &str,
        object: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        let url = format!(
            "{UPLOAD_API}/b/{}/o?uploadType=media&name={}",
            encode_query_value(bucket),
            encode_query_value(object)
        );
        let _: Value = self
            .http
            .send_bytes(&url, content_type, &bytes)
            .map_err(anyhow::Error::new)
            .with_context(|| format!("uploading {}", gcs_uri(bucket, object)))?;
        Ok(gcs_uri(bucket, object))
    }
}
