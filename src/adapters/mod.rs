// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod view;

pub use http::HttpBackend;
pub use view::{PageState, PageView};
