use crate::transport::TransportError;
use std::fmt;

/// Errors that can occur when calling the admin API
#[derive(Debug)]
pub enum ApiError {
	/// The backend responded with a non-success status
	Status { status: u16, body: String },
	Transport(TransportError),
	Json(serde_json::Error),
}

impl ApiError {
	/// Gets the `detail` message from a JSON error body, if the body has one
	pub fn detail(&self) -> Option<String> {
		let Self::Status { body, .. } = self else {
			return None;
		};
		let value: serde_json::Value = serde_json::from_str(body).ok()?;
		match value.get("detail")? {
			serde_json::Value::String(detail) => Some(detail.clone()),
			other => Some(other.to_string()),
		}
	}

	/// Whether the user has already been shown this error in an alert
	pub fn was_alerted(&self) -> bool {
		matches!(self, Self::Status { .. } | Self::Transport(_))
	}

	/// The text shown to the user in an alert for this error
	pub fn alert_text(&self) -> String {
		match self {
			Self::Status { status, body } => format!("Error: {}\n{}", status, body),
			other => format!("Error: {}", other),
		}
	}
}

impl From<TransportError> for ApiError {
	fn from(error: TransportError) -> Self {
		Self::Transport(error)
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(error: serde_json::Error) -> Self {
		Self::Json(error)
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Status { status, body } => write!(f, "The server responded with status {}: {}", status, body),
			Self::Transport(error) => write!(f, "Failed to reach the server: {}", error),
			Self::Json(error) => write!(f, "An invalid response was received: {}", error),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detail_is_read_from_json_body() {
		let error = ApiError::Status {
			status: 404,
			body: String::from(r#"{"detail":"Activity not found"}"#),
		};
		assert_eq!(error.detail().as_deref(), Some("Activity not found"));
		assert_eq!(error.alert_text(), "Error: 404\n{\"detail\":\"Activity not found\"}");
	}

	#[test]
	fn plain_text_body_has_no_detail() {
		let error = ApiError::Status {
			status: 500,
			body: String::from("Internal Server Error"),
		};
		assert_eq!(error.detail(), None);
	}

	#[test]
	fn transport_errors_are_alerted_without_status() {
		let error = ApiError::from(TransportError::new("connection refused"));
		assert_eq!(error.alert_text(), "Error: Failed to reach the server: connection refused");
	}
}
