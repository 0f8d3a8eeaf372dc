//! Appwrite 文档存储客户端

use async_trait::async_trait;
use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use validator::Validate;

use common::config::AppwriteConfig;
use common::errors::{AppError, AppResult};
use common::models::query::{ListDocumentsRequest, QueryResult};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";

/// 文档存储 Trait
///
/// Lists the documents of one collection matching every filter of the
/// request. Implementations perform exactly one backend call and never
/// retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 列出集合中的文档
    async fn list_documents(&self, req: &ListDocumentsRequest) -> AppResult<QueryResult>;
}

/// Appwrite REST 客户端
pub struct AppwriteClient {
    endpoint: String,
    project_id: Option<String>,
    api_key: Option<Secret<String>>,
    http_client: reqwest::Client,
}

/// Error body returned by Appwrite on non-2xx responses.
#[derive(Deserialize)]
struct RemoteError {
    #[serde(default)]
    message: String,
}

impl AppwriteClient {
    /// 创建新的 Appwrite 客户端
    pub fn new(config: &AppwriteConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Config(format!("无法创建 HTTP 客户端: {e}")))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
            http_client,
        })
    }

    fn documents_url(&self, req: &ListDocumentsRequest) -> AppResult<Url> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| AppError::Config(format!("APPWRITE_ENDPOINT 无效: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("APPWRITE_ENDPOINT 无效: {}", self.endpoint)))?
            .pop_if_empty()
            .extend([
                "databases",
                req.database_id.as_str(),
                "collections",
                req.collection_id.as_str(),
                "documents",
            ]);
        Ok(url)
    }
}

#[async_trait]
impl DocumentStore for AppwriteClient {
    async fn list_documents(&self, req: &ListDocumentsRequest) -> AppResult<QueryResult> {
        req.validate()?;
        let project_id = self
            .project_id
            .as_deref()
            .ok_or(AppError::MissingConfig("APPWRITE_PROJECT_ID"))?;
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(AppError::MissingConfig("APPWRITE_API_KEY"))?;

        let url = self.documents_url(req)?;
        let queries: Vec<(&str, String)> = req
            .filters
            .iter()
            .map(|f| ("queries[]", f.to_appwrite_query()))
            .collect();

        tracing::info!(
            database_id = %req.database_id,
            collection_id = %req.collection_id,
            filters = req.filters.len(),
            "查询 Appwrite 文档"
        );

        let response = self
            .http_client
            .get(url)
            .header(PROJECT_HEADER, project_id)
            .header(KEY_HEADER, api_key.expose_secret().as_str())
            .query(&queries)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RemoteError>(&body)
                .ok()
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status.to_string());
            tracing::warn!(status = status.as_u16(), error = %message, "Appwrite 返回错误");
            return Err(AppError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        QueryResult::from_slice(&body).map_err(|e| AppError::InvalidResponse(e.to_string()))
    }
}
