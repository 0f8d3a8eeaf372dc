//! 订阅查询服务模块

use std::sync::Arc;

use common::config::AppwriteConfig;
use common::errors::{AppError, AppResult};
use common::models::query::{ListDocumentsRequest, QueryResult};

use crate::client::DocumentStore;

/// Field subscriptions are filtered on.
pub const NAME_FIELD: &str = "name";

/// 订阅查询服务
///
/// Binds a document store to the configured subscription collection.
pub struct SubscriptionService {
    store: Arc<dyn DocumentStore>,
    database_id: Option<String>,
    collection_id: Option<String>,
}

impl SubscriptionService {
    /// 创建新的订阅服务实例
    pub fn new(store: Arc<dyn DocumentStore>, config: &AppwriteConfig) -> Self {
        Self {
            store,
            database_id: config.database_id.clone(),
            collection_id: config.subscription_collection_id.clone(),
        }
    }

    /// 列出所有订阅
    pub async fn list_all(&self) -> AppResult<QueryResult> {
        let req = self.request()?;
        self.store.list_documents(&req).await
    }

    /// 按名称筛选订阅
    pub async fn list_by_name(&self, name: &str) -> AppResult<QueryResult> {
        let req = self.request()?.filter(NAME_FIELD, name);
        self.store.list_documents(&req).await
    }

    fn request(&self) -> AppResult<ListDocumentsRequest> {
        let database_id = self
            .database_id
            .as_deref()
            .ok_or(AppError::MissingConfig("APPWRITE_DATABASE_ID"))?;
        let collection_id = self
            .collection_id
            .as_deref()
            .ok_or(AppError::MissingConfig("APPWRITE_COLLECTION_ID_SUBSCRIPTION"))?;
        Ok(ListDocumentsRequest::new(database_id, collection_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use common::models::query::EqualityFilter;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records requests and echoes them back.
    #[derive(Default)]
    struct RecordingStore {
        seen: Mutex<Vec<ListDocumentsRequest>>,
    }

    #[async_trait]
    impl DocumentStore for RecordingStore {
        async fn list_documents(&self, req: &ListDocumentsRequest) -> AppResult<QueryResult> {
            self.seen.lock().unwrap().push(req.clone());
            Ok(QueryResult::from_value(&json!({"total": 0, "documents": []})).unwrap())
        }
    }

    fn config(database_id: Option<&str>, collection_id: Option<&str>) -> AppwriteConfig {
        AppwriteConfig {
            endpoint: "http://localhost/v1".to_string(),
            project_id: None,
            api_key: None,
            database_id: database_id.map(String::from),
            subscription_collection_id: collection_id.map(String::from),
            timeout: None,
        }
    }

    #[tokio::test]
    async fn test_list_all_sends_no_filters() {
        let store = Arc::new(RecordingStore::default());
        let service = SubscriptionService::new(store.clone(), &config(Some("db"), Some("subs")));

        service.list_all().await.unwrap();

        let seen = store.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[ListDocumentsRequest::new("db", "subs")]);
    }

    #[tokio::test]
    async fn test_list_by_name_sends_single_equality_filter() {
        let store = Arc::new(RecordingStore::default());
        let service = SubscriptionService::new(store.clone(), &config(Some("db"), Some("subs")));

        service.list_by_name("netflix").await.unwrap();

        let seen = store.seen.lock().unwrap();
        assert_eq!(seen[0].filters, vec![EqualityFilter::new("name", "netflix")]);
    }

    #[tokio::test]
    async fn test_missing_collection_skips_backend_call() {
        let store = Arc::new(RecordingStore::default());
        let service = SubscriptionService::new(store.clone(), &config(Some("db"), None));

        let err = service.list_all().await.unwrap_err();

        assert!(matches!(
            err,
            AppError::MissingConfig("APPWRITE_COLLECTION_ID_SUBSCRIPTION")
        ));
        assert!(store.seen.lock().unwrap().is_empty());
    }
}
