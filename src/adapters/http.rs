use crate::domain::model::{ClickLog, DraftRequest, GenerationResult, RegistrationDraft};
use crate::domain::ports::{ConfigProvider, PlanBackend};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};

/// reqwest 實作的後端連線
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    structure_path: String,
    click_log_path: String,
    preregister_path: String,
}

impl HttpBackend {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            structure_path: config.structure_path().to_string(),
            click_log_path: config.click_log_path().to_string(),
            preregister_path: config.preregister_path().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 非 2xx 時讀出回應本文並轉成錯誤
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        Err(FormError::HttpError {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PlanBackend for HttpBackend {
    async fn generate(&self, draft: &DraftRequest) -> Result<GenerationResult> {
        let url = self.url(&self.structure_path);
        tracing::debug!(
            "POST {} (faculty={}, length={})",
            url,
            draft.faculty,
            draft.length
        );

        let response = self.client.post(&url).json(draft).send().await?;
        tracing::debug!("Structure response status: {}", response.status());

        let response = Self::ensure_success(response).await?;
        let result = response.json::<GenerationResult>().await?;
        Ok(result)
    }

    async fn log_click(&self) -> Result<ClickLog> {
        let url = self.url(&self.click_log_path);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<ClickLog>().await?)
    }

    async fn preregister(&self, draft: &RegistrationDraft) -> Result<u16> {
        let url = self.url(&self.preregister_path);
        tracing::debug!("POST {}", url);

        // .json() 會帶上 Content-Type: application/json
        let response = self.client.post(&url).json(draft).send().await?;
        Ok(response.status().as_u16())
    }
}
