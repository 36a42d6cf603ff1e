use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::storage::application::ports::outgoing::object_store::{
    ListChunk, ObjectStore, ObjectStoreError, ObjectSummary,
};

/// TTL for signed upload URLs.
const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

fn map_store_error(msg: &str) -> ObjectStoreError {
    let m = msg.to_lowercase();

    if m.contains("404") || m.contains("not found") || m.contains("no such object") {
        ObjectStoreError::NotFound
    } else if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        ObjectStoreError::AccessDenied
    } else {
        ObjectStoreError::Infrastructure(msg.to_string())
    }
}

/// Raw listing page as the bucket API returns it.
#[derive(Debug, Clone, Default)]
struct RawListPage {
    objects: Vec<(String, i64)>,
    prefixes: Vec<String>,
    has_more: bool,
}

/// Internal seam so the adapter is testable without mocking the
/// google-cloud-storage client types.
#[async_trait]
trait GcsApi: Send + Sync {
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        delimiter: Option<String>,
        max_results: i32,
    ) -> Result<RawListPage, String>;

    async fn delete_object(&self, bucket: &str, object: &str) -> Result<(), String>;

    async fn upload_empty_object(&self, bucket: &str, object: &str) -> Result<(), String>;

    async fn sign_put_url(
        &self,
        bucket: &str,
        object: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

#[cfg(test)]
struct ArcGcsApi(Arc<dyn GcsApi>);

#[cfg(test)]
#[async_trait]
impl GcsApi for ArcGcsApi {
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        delimiter: Option<String>,
        max_results: i32,
    ) -> Result<RawListPage, String> {
        self.0.list_objects(bucket, prefix, delimiter, max_results).await
    }

    async fn delete_object(&self, bucket: &str, object: &str) -> Result<(), String> {
        self.0.delete_object(bucket, object).await
    }

    async fn upload_empty_object(&self, bucket: &str, object: &str) -> Result<(), String> {
        self.0.upload_empty_object(bucket, object).await
    }

    async fn sign_put_url(
        &self,
        bucket: &str,
        object: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        self.0.sign_put_url(bucket, object, content_type, ttl).await
    }
}

/// Production adapter over the media bucket.
#[derive(Clone)]
pub struct GcsObjectStore {
    api: Arc<OnceCell<Box<dyn GcsApi>>>,
    bucket: String,
    signed_url_ttl: Duration,
}

impl GcsObjectStore {
    /// Synchronous constructor; the client is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            api: Arc::new(OnceCell::new()),
            bucket,
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }

    async fn get_api(&self) -> Result<&dyn GcsApi, ObjectStoreError> {
        self.api
            .get_or_try_init(|| async {
                let real = RealGcsApi::new().await.map_err(|e| {
                    ObjectStoreError::Infrastructure(format!("GCS client init failed: {e}"))
                })?;
                Ok(Box::new(real) as Box<dyn GcsApi>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_api(api: Arc<dyn GcsApi>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsApi(api)) as Box<dyn GcsApi>);

        Self {
            api: Arc::new(once),
            bucket: bucket.to_string(),
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn list(
        &self,
        prefix: &str,
        delimiter: Option<&str>,
        max_results: i32,
    ) -> Result<ListChunk, ObjectStoreError> {
        let api = self.get_api().await?;

        let page = api
            .list_objects(
                &self.bucket,
                prefix,
                delimiter.map(|d| d.to_string()),
                max_results,
            )
            .await
            .map_err(|e| map_store_error(&e))?;

        Ok(ListChunk {
            objects: page
                .objects
                .into_iter()
                .map(|(key, size)| ObjectSummary { key, size })
                .collect(),
            prefixes: page.prefixes,
            truncated: page.has_more,
        })
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError> {
        let api = self.get_api().await?;

        api.delete_object(&self.bucket, key)
            .await
            .map_err(|e| map_store_error(&e))
    }

    async fn put_empty(&self, key: &str) -> Result<(), ObjectStoreError> {
        let api = self.get_api().await?;

        api.upload_empty_object(&self.bucket, key)
            .await
            .map_err(|e| map_store_error(&e))
    }

    async fn signed_upload_url(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<String, ObjectStoreError> {
        let api = self.get_api().await?;

        api.sign_put_url(&self.bucket, key, content_type, self.signed_url_ttl)
            .await
            .map_err(|e| map_store_error(&e))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsApi {
    client: google_cloud_storage::client::Client,
}

impl RealGcsApi {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| {
                tracing::error!("Failed to authenticate GCS client: {:?}", e);
                e
            })?;

        Ok(Self {
            client: google_cloud_storage::client::Client::new(config),
        })
    }
}

#[async_trait]
impl GcsApi for RealGcsApi {
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        delimiter: Option<String>,
        max_results: i32,
    ) -> Result<RawListPage, String> {
        use google_cloud_storage::http::objects::list::ListObjectsRequest;

        let response = self
            .client
            .list_objects(&ListObjectsRequest {
                bucket: bucket.to_string(),
                prefix: Some(prefix.to_string()),
                delimiter,
                max_results: Some(max_results),
                ..Default::default()
            })
            .await
            .map_err(|e| e.to_string())?;

        let objects = response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|o| (o.name, o.size))
            .collect();

        Ok(RawListPage {
            objects,
            prefixes: response.prefixes.unwrap_or_default(),
            has_more: response.next_page_token.is_some(),
        })
    }

    async fn delete_object(&self, bucket: &str, object: &str) -> Result<(), String> {
        use google_cloud_storage::http::objects::delete::DeleteObjectRequest;

        self.client
            .delete_object(&DeleteObjectRequest {
                bucket: bucket.to_string(),
                object: object.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| e.to_string())
    }

    async fn upload_empty_object(&self, bucket: &str, object: &str) -> Result<(), String> {
        use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                Vec::<u8>::new(),
                &UploadType::Simple(Media::new(object.to_string())),
            )
            .await
            .map(|_object| ())
            .map_err(|e| e.to_string())
    }

    async fn sign_put_url(
        &self,
        bucket: &str,
        object: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        use google_cloud_storage::sign::{SignedURLMethod, SignedURLOptions};

        self.client
            .signed_url(
                bucket,
                object,
                Some(content_type.to_string()),
                None,
                SignedURLOptions {
                    method: SignedURLMethod::PUT,
                    expires: ttl,
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeGcsApi {
        last_list_call: Mutex<Option<(String, String, Option<String>, i32)>>,
        last_delete_call: Mutex<Option<(String, String)>>,
        last_upload_call: Mutex<Option<(String, String)>>,
        last_sign_call: Mutex<Option<(String, String, String, Duration)>>,
        list_result: Mutex<Result<RawListPage, String>>,
        delete_result: Mutex<Result<(), String>>,
        upload_result: Mutex<Result<(), String>>,
        sign_result: Mutex<Result<String, String>>,
    }

    impl FakeGcsApi {
        fn new() -> Self {
            Self {
                last_list_call: Mutex::new(None),
                last_delete_call: Mutex::new(None),
                last_upload_call: Mutex::new(None),
                last_sign_call: Mutex::new(None),
                list_result: Mutex::new(Ok(RawListPage::default())),
                delete_result: Mutex::new(Ok(())),
                upload_result: Mutex::new(Ok(())),
                sign_result: Mutex::new(Ok("https://signed.example".to_string())),
            }
        }
    }

    #[async_trait]
    impl GcsApi for FakeGcsApi {
        async fn list_objects(
            &self,
            bucket: &str,
            prefix: &str,
            delimiter: Option<String>,
            max_results: i32,
        ) -> Result<RawListPage, String> {
            *self.last_list_call.lock().unwrap() = Some((
                bucket.to_string(),
                prefix.to_string(),
                delimiter,
                max_results,
            ));
            self.list_result.lock().unwrap().clone()
        }

        async fn delete_object(&self, bucket: &str, object: &str) -> Result<(), String> {
            *self.last_delete_call.lock().unwrap() =
                Some((bucket.to_string(), object.to_string()));
            self.delete_result.lock().unwrap().clone()
        }

        async fn upload_empty_object(&self, bucket: &str, object: &str) -> Result<(), String> {
            *self.last_upload_call.lock().unwrap() =
                Some((bucket.to_string(), object.to_string()));
            self.upload_result.lock().unwrap().clone()
        }

        async fn sign_put_url(
            &self,
            bucket: &str,
            object: &str,
            content_type: &str,
            ttl: Duration,
        ) -> Result<String, String> {
            *self.last_sign_call.lock().unwrap() = Some((
                bucket.to_string(),
                object.to_string(),
                content_type.to_string(),
                ttl,
            ));
            self.sign_result.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn list_maps_page_and_passes_arguments() {
        let fake = Arc::new(FakeGcsApi::new());
        *fake.list_result.lock().unwrap() = Ok(RawListPage {
            objects: vec![("documents/cv/resume.pdf".to_string(), 1024)],
            prefixes: vec!["documents/cv/archive/".to_string()],
            has_more: true,
        });

        let store = GcsObjectStore::with_api(fake.clone(), "portfolio-site-media");

        let chunk = store.list("documents/cv/", Some("/"), 500).await.unwrap();
        assert_eq!(chunk.objects.len(), 1);
        assert_eq!(chunk.objects[0].key, "documents/cv/resume.pdf");
        assert_eq!(chunk.objects[0].size, 1024);
        assert_eq!(chunk.prefixes, vec!["documents/cv/archive/".to_string()]);
        assert!(chunk.truncated);

        let call = fake.last_list_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "portfolio-site-media");
        assert_eq!(call.1, "documents/cv/");
        assert_eq!(call.2.as_deref(), Some("/"));
        assert_eq!(call.3, 500);
    }

    #[tokio::test]
    async fn delete_maps_not_found() {
        let fake = Arc::new(FakeGcsApi::new());
        *fake.delete_result.lock().unwrap() = Err("No such object (404)".to_string());

        let store = GcsObjectStore::with_api(fake, "portfolio-site-media");

        let err = store.delete("documents/cv/gone.pdf").await.unwrap_err();
        assert_eq!(err, ObjectStoreError::NotFound);
    }

    #[tokio::test]
    async fn delete_maps_access_denied() {
        let fake = Arc::new(FakeGcsApi::new());
        *fake.delete_result.lock().unwrap() = Err("Permission denied".to_string());

        let store = GcsObjectStore::with_api(fake, "portfolio-site-media");

        let err = store.delete("documents/cv/x.pdf").await.unwrap_err();
        assert_eq!(err, ObjectStoreError::AccessDenied);
    }

    #[tokio::test]
    async fn unknown_errors_are_infrastructure() {
        let fake = Arc::new(FakeGcsApi::new());
        *fake.list_result.lock().unwrap() = Err("something odd".to_string());

        let store = GcsObjectStore::with_api(fake, "portfolio-site-media");

        let err = store.list("documents/", None, 1000).await.unwrap_err();
        assert!(matches!(err, ObjectStoreError::Infrastructure(_)));
    }

    #[tokio::test]
    async fn put_empty_targets_bucket_and_key() {
        let fake = Arc::new(FakeGcsApi::new());
        let store = GcsObjectStore::with_api(fake.clone(), "portfolio-site-media");

        store.put_empty("rootdocs/new/.keep").await.unwrap();

        let call = fake.last_upload_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "portfolio-site-media");
        assert_eq!(call.1, "rootdocs/new/.keep");
    }

    #[tokio::test]
    async fn signed_upload_url_uses_configured_ttl() {
        let fake = Arc::new(FakeGcsApi::new());
        let store = GcsObjectStore::with_api(fake.clone(), "portfolio-site-media");

        let url = store
            .signed_upload_url("gallery/travel/rome.webp", "image/webp")
            .await
            .unwrap();
        assert_eq!(url, "https://signed.example");

        let call = fake.last_sign_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.1, "gallery/travel/rome.webp");
        assert_eq!(call.2, "image/webp");
        assert_eq!(call.3, SIGNED_URL_TTL);
    }
}
