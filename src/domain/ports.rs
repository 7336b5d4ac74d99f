use crate::domain::model::{
    ClickLog, DraftRequest, FormInput, GenerationResult, PlanSlot, RegistrationDraft,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn structure_path(&self) -> &str;
    fn click_log_path(&self) -> &str;
    fn preregister_path(&self) -> &str;
}

/// 後端的三個端點
#[async_trait]
pub trait PlanBackend: Send + Sync {
    /// `POST /structure`; a non-2xx answer is returned as `FormError::HttpError`.
    async fn generate(&self, draft: &DraftRequest) -> Result<GenerationResult>;
    async fn log_click(&self) -> Result<ClickLog>;
    /// Returns the HTTP status; the body is never inspected.
    async fn preregister(&self, draft: &RegistrationDraft) -> Result<u16>;
}

/// The page surface every handler reads from and renders into.
///
/// Implementations hold all interactive regions; the controller never looks
/// elements up on its own.
pub trait FormView: Send + Sync {
    fn read_form(&self) -> FormInput;
    fn fill_form(&self, input: FormInput);
    fn render_plan(&self, slot: PlanSlot, text: &str);
    fn alert(&self, message: &str);
    fn set_message(&self, text: &str);
    fn show_registration_form(&self);
    fn read_registration(&self) -> RegistrationDraft;
}
