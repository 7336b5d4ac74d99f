use clap::Parser;
use plan_form::domain::model::{FormInput, PlanSlot, SubmitEvent};
use plan_form::domain::ports::FormView;
use plan_form::utils::error::ErrorSeverity;
use plan_form::utils::{logger, validation::Validate};
use plan_form::{
    ClientConfig, Command, FormController, FormError, GenerateOutcome, HttpBackend, LocalStorage,
    PageState, PageView, PlanArchive, RegisterOutcome, Settings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting plan-form CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並驗證配置
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config.command, settings).await {
        tracing::error!(
            "❌ plan-form failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: Command, settings: Settings) -> Result<(), FormError> {
    let view = PageView::new();
    let controller = FormController::new(HttpBackend::new(&settings), view.clone());

    match command {
        Command::Example => {
            controller.populate_example();
            print_form(&view.snapshot());
            Ok(())
        }
        Command::Generate {
            theme,
            faculty,
            length,
            example,
            ..
        } => {
            if example {
                controller.populate_example();
            } else {
                view.fill_form(FormInput {
                    theme,
                    faculty,
                    length,
                });
            }

            let outcome = controller.submit_generation().await;
            let state = view.snapshot();
            print_alerts(&state);
            print_plans(&state);

            match outcome {
                GenerateOutcome::Rendered { draft, result } => {
                    if let Some(path) = &settings.archive_path {
                        let archive = PlanArchive::new(LocalStorage::new(path.clone()));
                        let entry = archive.append(&draft, &result).await?;
                        tracing::info!("📁 Plans archived at {} ({})", path, entry.time);
                    }
                    Ok(())
                }
                GenerateOutcome::Rejected(e) | GenerateOutcome::Failed(e) => Err(e),
                GenerateOutcome::Busy => Err(FormError::Busy),
            }
        }
        Command::Register { name, email } => {
            let click_log = controller.reveal_registration();
            println!("{}", view.snapshot().message);

            view.set_registration(&name, &email);
            let mut event = SubmitEvent::new();
            let outcome = controller.submit_registration(&mut event).await;

            // 讓點擊紀錄在程式結束前完成，結果只寫入日誌
            if let Err(e) = click_log.await {
                tracing::debug!("Click log task ended abnormally: {}", e);
            }

            print_alerts(&view.snapshot());
            match outcome {
                RegisterOutcome::Confirmed { .. } => Ok(()),
                RegisterOutcome::Failed(e) => Err(e),
            }
        }
    }
}

fn print_form(state: &PageState) {
    println!("faculty: {}", state.form.faculty);
    println!("length:  {}", state.form.length);
    println!("theme:   {}", state.form.theme);
}

fn print_plans(state: &PageState) {
    for slot in PlanSlot::ALL {
        println!("===== plan{} =====", slot.index() + 1);
        println!("{}", state.plans[slot.index()]);
    }
}

fn print_alerts(state: &PageState) {
    for alert in &state.alerts {
        eprintln!("⚠️  {}", alert);
    }
}
