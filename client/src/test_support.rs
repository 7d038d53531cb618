use crate::dialogs::Dialogs;
use crate::transport::{ApiRequest, ApiResponse, Transport, TransportError};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Dialogs that answer from queued responses and record everything shown
#[derive(Default)]
pub struct FakeDialogs {
	prompt_answers: RefCell<VecDeque<Option<String>>>,
	confirm_answers: RefCell<VecDeque<bool>>,
	prompts: RefCell<Vec<String>>,
	alerts: RefCell<Vec<String>>,
	confirms: RefCell<Vec<String>>,
}

impl FakeDialogs {
	pub fn queue_prompt(&self, answer: Option<&str>) {
		self.prompt_answers.borrow_mut().push_back(answer.map(String::from));
	}

	pub fn queue_confirm(&self, answer: bool) {
		self.confirm_answers.borrow_mut().push_back(answer);
	}

	pub fn prompts(&self) -> Vec<String> {
		self.prompts.borrow().clone()
	}

	pub fn alerts(&self) -> Vec<String> {
		self.alerts.borrow().clone()
	}

	pub fn confirms(&self) -> Vec<String> {
		self.confirms.borrow().clone()
	}
}

impl Dialogs for FakeDialogs {
	fn prompt(&self, message: &str) -> Option<String> {
		self.prompts.borrow_mut().push(message.to_string());
		self.prompt_answers.borrow_mut().pop_front().flatten()
	}

	fn alert(&self, message: &str) {
		self.alerts.borrow_mut().push(message.to_string());
	}

	fn confirm(&self, message: &str) -> bool {
		self.confirms.borrow_mut().push(message.to_string());
		self.confirm_answers.borrow_mut().pop_front().unwrap_or(false)
	}
}

/// Transport that replies with queued responses and records every request
#[derive(Default)]
pub struct FakeTransport {
	responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
	requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
	pub fn respond(&self, status: u16, body: &str) {
		self.responses.borrow_mut().push_back(Ok(ApiResponse {
			status,
			body: body.to_string(),
		}));
	}

	pub fn fail(&self, message: &str) {
		self.responses.borrow_mut().push_back(Err(TransportError::new(message)));
	}

	pub fn requests(&self) -> Vec<ApiRequest> {
		self.requests.borrow().clone()
	}
}

impl Transport for FakeTransport {
	async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
		self.requests.borrow_mut().push(request);
		self.responses
			.borrow_mut()
			.pop_front()
			.unwrap_or_else(|| Err(TransportError::new("no response queued")))
	}
}
