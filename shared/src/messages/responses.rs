use serde::{Deserialize, Serialize};

/// Acknowledgement returned by the backend for successful modifications
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiMessage {
	pub message: String,
}
