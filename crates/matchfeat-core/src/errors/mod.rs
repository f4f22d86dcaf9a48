//! Error handling for matchfeat.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod feature_error;
pub mod input_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use feature_error::{FeatureError, FeatureResult};
pub use input_error::InputError;
