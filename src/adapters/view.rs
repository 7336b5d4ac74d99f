use crate::domain::model::{FormInput, PlanSlot, RegistrationDraft};
use crate::domain::ports::FormView;
use std::sync::{Arc, Mutex, MutexGuard};

/// 頁面上所有區塊的目前狀態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub form: FormInput,
    pub plans: [String; 3],
    pub message: String,
    pub registration_visible: bool,
    pub registration: RegistrationDraft,
    pub alerts: Vec<String>,
}

/// In-memory view-model holding every interactive region.
///
/// Cloning shares the same state, so a handle can be kept for inspection while
/// the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    state: Arc<Mutex<PageState>>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(input: FormInput) -> Self {
        let view = Self::new();
        view.lock().form = input;
        view
    }

    pub fn set_registration(&self, name: &str, email: &str) {
        self.lock().registration = RegistrationDraft {
            name: name.to_string(),
            email: email.to_string(),
        };
    }

    pub fn snapshot(&self) -> PageState {
        self.lock().clone()
    }

    pub fn plan(&self, slot: PlanSlot) -> String {
        self.lock().plans[slot.index()].clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        // 狀態只有純資料，poison 後照常使用
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FormView for PageView {
    fn read_form(&self) -> FormInput {
        self.lock().form.clone()
    }

    fn fill_form(&self, input: FormInput) {
        self.lock().form = input;
    }

    fn render_plan(&self, slot: PlanSlot, text: &str) {
        self.lock().plans[slot.index()] = text.to_string();
    }

    fn alert(&self, message: &str) {
        tracing::debug!("alert: {}", message);
        self.lock().alerts.push(message.to_string());
    }

    fn set_message(&self, text: &str) {
        self.lock().message = text.to_string();
    }

    fn show_registration_form(&self) {
        self.lock().registration_visible = true;
    }

    fn read_registration(&self) -> RegistrationDraft {
        self.lock().registration.clone()
    }
}
