pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{ClientConfig, Command};

pub use adapters::{HttpBackend, PageState, PageView};
pub use config::{cli::LocalStorage, Settings};
pub use core::archive::PlanArchive;
pub use core::controller::{FormController, GenerateOutcome, RegisterOutcome};
pub use utils::error::{FormError, Result};
