use crate::core::{FormView, PlanBackend};
use crate::domain::model::{
    text, DraftRequest, ExampleTemplate, Faculty, FormInput, GenerationResult, PlanSlot,
    SubmitEvent, EXAMPLES,
};
use crate::utils::error::{FormError, Result};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub enum GenerateOutcome {
    /// 輸入不完整，已跳出提示，沒有送出請求
    Rejected(FormError),
    /// Another generation was still pending; nothing was touched.
    Busy,
    Rendered {
        draft: DraftRequest,
        result: GenerationResult,
    },
    Failed(FormError),
}

#[derive(Debug)]
pub enum RegisterOutcome {
    /// 伺服器有回應（不論狀態碼）
    Confirmed { status: u16 },
    Failed(FormError),
}

/// Drives the plan form: example filling, generation, and pre-registration.
pub struct FormController<B: PlanBackend + 'static, V: FormView> {
    backend: Arc<B>,
    view: Arc<V>,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<B: PlanBackend + 'static, V: FormView> FormController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self::from_shared(Arc::new(backend), Arc::new(view))
    }

    pub fn from_shared(backend: Arc<B>, view: Arc<V>) -> Self {
        Self {
            backend,
            view,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn populate_example(&self) -> ExampleTemplate {
        self.populate_example_with(&mut rand::rng())
    }

    pub fn populate_example_with<R: Rng>(&self, rng: &mut R) -> ExampleTemplate {
        let example = EXAMPLES[rng.random_range(0..EXAMPLES.len())];
        tracing::debug!("Filling form with {} example", example.faculty);
        self.view.fill_form(example.to_input());
        example
    }

    pub async fn submit_generation(&self) -> GenerateOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::warn!("Generation already in flight, ignoring trigger");
            return GenerateOutcome::Busy;
        };

        let draft = match validate_form(&self.view.read_form()) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!("Form rejected: {}", e);
                self.view.alert(text::MISSING_INPUT_ALERT);
                return GenerateOutcome::Rejected(e);
            }
        };

        for slot in PlanSlot::ALL {
            self.view.render_plan(slot, text::GENERATING);
        }

        tracing::info!(
            "🚀 Requesting plans (faculty={}, length={})",
            draft.faculty,
            draft.length
        );

        match self.backend.generate(&draft).await {
            Ok(result) => {
                for (slot, plan) in PlanSlot::ALL.into_iter().zip(result.rendered()) {
                    self.view.render_plan(slot, &plan);
                }
                tracing::info!("✅ Plans rendered");
                GenerateOutcome::Rendered { draft, result }
            }
            Err(e) => {
                tracing::error!("❌ Plan generation failed: {}", e);
                self.view
                    .render_plan(PlanSlot::First, &format!("{}{}", text::ERROR_PREFIX, e));
                self.view.render_plan(PlanSlot::Second, text::ERROR_LABEL);
                self.view.render_plan(PlanSlot::Third, text::ERROR_LABEL);
                GenerateOutcome::Failed(e)
            }
        }
    }

    /// Shows the registration form and logs the click in the background.
    ///
    /// The returned handle may be awaited or dropped; the click count is only
    /// ever logged. Must be called inside a tokio runtime.
    pub fn reveal_registration(&self) -> JoinHandle<()> {
        self.view.set_message(text::PREREGISTER_PROMO);
        self.view.show_registration_form();

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            match backend.log_click().await {
                Ok(log) => tracing::info!("Click logged (clicks={:?})", log.clicks),
                Err(e) => tracing::debug!("Click log failed: {}", e),
            }
        })
    }

    pub async fn submit_registration(&self, event: &mut SubmitEvent) -> RegisterOutcome {
        event.prevent_default();
        let draft = self.view.read_registration();

        match self.backend.preregister(&draft).await {
            Ok(status) => {
                if !(200..300).contains(&status) {
                    tracing::warn!("Pre-registration answered with HTTP {}", status);
                }
                self.view.alert(text::PREREGISTER_DONE);
                RegisterOutcome::Confirmed { status }
            }
            Err(e) => {
                tracing::warn!("Pre-registration failed: {}", e);
                self.view.alert(text::PREREGISTER_FAILED);
                RegisterOutcome::Failed(e)
            }
        }
    }
}

/// 空字串、非數字或 0 都視為未填
pub fn coerce_length(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|length| *length > 0)
}

pub fn validate_form(input: &FormInput) -> Result<DraftRequest> {
    let theme = input.theme.trim();
    let faculty = input
        .faculty
        .parse::<Faculty>()
        .map_err(|message| FormError::ValidationError { message })?;
    if theme.is_empty() {
        return Err(FormError::ValidationError {
            message: "theme is empty".to_string(),
        });
    }
    let length = coerce_length(&input.length).ok_or_else(|| FormError::ValidationError {
        message: format!("invalid length: '{}'", input.length),
    })?;

    Ok(DraftRequest {
        theme: theme.to_string(),
        faculty,
        length,
    })
}
