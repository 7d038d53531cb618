use crate::dialogs::Dialogs;
use std::cell::RefCell;

/// Holds the admin token for the lifetime of the page. The user is asked for the token the first time it's needed;
/// the answer is kept until the page is reloaded.
pub struct AdminSession {
	token: RefCell<Option<String>>,
	default_token: String,
}

impl AdminSession {
	pub fn new(default_token: impl Into<String>) -> Self {
		Self {
			token: RefCell::new(None),
			default_token: default_token.into(),
		}
	}

	/// Gets the cached token, prompting for it if there isn't one yet. An empty or canceled prompt falls back to the
	/// default token.
	pub fn token(&self, dialogs: &impl Dialogs) -> String {
		if let Some(token) = self.token.borrow().as_ref() {
			return token.clone();
		}

		let token = match dialogs.prompt(&self.prompt_text()) {
			Some(entered) if !entered.is_empty() => entered,
			_ => self.default_token.clone(),
		};
		*self.token.borrow_mut() = Some(token.clone());
		token
	}

	fn prompt_text(&self) -> String {
		format!("Enter admin token (default: {})", self.default_token)
	}

	pub fn has_token(&self) -> bool {
		self.token.borrow().is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::FakeDialogs;

	#[test]
	fn entered_token_is_cached() {
		let dialogs = FakeDialogs::default();
		dialogs.queue_prompt(Some("hunter2"));
		let session = AdminSession::new("secret-token");

		assert!(!session.has_token());
		assert_eq!(session.token(&dialogs), "hunter2");
		assert_eq!(session.token(&dialogs), "hunter2");
		assert_eq!(
			dialogs.prompts(),
			vec![String::from("Enter admin token (default: secret-token)")]
		);
	}

	#[test]
	fn canceled_or_empty_prompt_uses_default() {
		let dialogs = FakeDialogs::default();
		dialogs.queue_prompt(None);
		let session = AdminSession::new("secret-token");
		assert_eq!(session.token(&dialogs), "secret-token");

		let dialogs = FakeDialogs::default();
		dialogs.queue_prompt(Some(""));
		let session = AdminSession::new("secret-token");
		assert_eq!(session.token(&dialogs), "secret-token");
		assert!(session.has_token());
	}

	#[test]
	fn prompt_names_configured_default() {
		let dialogs = FakeDialogs::default();
		let session = AdminSession::new("school-admin");

		assert_eq!(session.token(&dialogs), "school-admin");
		assert_eq!(
			dialogs.prompts(),
			vec![String::from("Enter admin token (default: school-admin)")]
		);
	}
}
