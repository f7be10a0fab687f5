// core/src/envelope.rs

//! The `{ success, data?, message? }` wrapper every catalog response uses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
  pub success: bool,
  // No `default` here: it would demand `T: Default` when decoding.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl<T> Envelope<T> {
  /// Successful response carrying a payload.
  pub fn data(data: T) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: None,
    }
  }

  /// Successful response carrying only a message.
  pub fn message(message: impl Into<String>) -> Self {
    Self {
      success: true,
      data: None,
      message: Some(message.into()),
    }
  }

  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      success: false,
      data: None,
      message: Some(message.into()),
    }
  }
}
