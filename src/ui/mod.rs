pub mod actions;
pub mod driver;
pub mod mock;

pub use actions::{click_button, retry_with_timeout, set_input_value, with_tolerance, InputKind, Tolerance};
pub use driver::{CdpDriver, PageDriver, DEFAULT_VISIBILITY_TIMEOUT};
