pub mod archive;
pub mod controller;

pub use crate::domain::ports::{ConfigProvider, FormView, PlanBackend, Storage};
pub use crate::utils::error::Result;
