use crate::config::ConsoleConfig;
use crate::dialogs::Dialogs;
use crate::error::ApiError;
use crate::session::AdminSession;
use crate::transport::{ApiRequest, HttpMethod, Transport};
use activity_admin_shared::endpoints;
use activity_admin_shared::messages::activities::{ActivityList, ActivityUpdate, NewActivity};
use activity_admin_shared::messages::responses::ApiMessage;
use activity_admin_shared::messages::ADMIN_TOKEN_HEADER;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for the admin REST API. Every request carries the session's admin token, and every failed request is
/// reported to the user with an alert before the error is returned.
pub struct ApiClient<T, D> {
	transport: T,
	dialogs: D,
	session: AdminSession,
	config: ConsoleConfig,
}

impl<T: Transport, D: Dialogs> ApiClient<T, D> {
	pub fn new(transport: T, dialogs: D, config: ConsoleConfig) -> Self {
		let session = AdminSession::new(config.default_token.clone());
		Self {
			transport,
			dialogs,
			session,
			config,
		}
	}

	#[cfg(test)]
	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn dialogs(&self) -> &D {
		&self.dialogs
	}

	pub fn config(&self) -> &ConsoleConfig {
		&self.config
	}

	/// Sends a request to the API.
	///
	/// # Errors
	///
	/// Any non-success status is alerted to the user (status code and response body) and returned as an error, as
	/// are network failures. A 204 response returns `None` without reading the body; any other success response is
	/// parsed as JSON.
	pub async fn call<R: DeserializeOwned>(
		&self,
		method: HttpMethod,
		path: &str,
		body: Option<String>,
	) -> Result<Option<R>, ApiError> {
		if !self.session.has_token() {
			log::debug!("Asking for the admin token");
		}
		let token = self.session.token(&self.dialogs);
		let mut headers = vec![(String::from(ADMIN_TOKEN_HEADER), token)];
		if body.is_some() {
			headers.push((String::from("Content-Type"), String::from("application/json")));
		}
		let request = ApiRequest {
			method,
			url: self.config.url_for(path),
			headers,
			body,
		};
		log::debug!("{} {}", request.method, request.url);

		let response = match self.transport.send(request).await {
			Ok(response) => response,
			Err(error) => {
				let error = ApiError::from(error);
				log::warn!("{} {} failed: {}", method, path, error);
				self.dialogs.alert(&error.alert_text());
				return Err(error);
			}
		};

		if !response.is_success() {
			let error = ApiError::Status {
				status: response.status,
				body: response.body,
			};
			match error.detail() {
				Some(detail) => log::warn!("{} {} rejected: {}", method, path, detail),
				None => log::warn!("{} {} rejected: {}", method, path, error),
			}
			self.dialogs.alert(&error.alert_text());
			return Err(error);
		}

		if response.status == 204 {
			return Ok(None);
		}

		match serde_json::from_str(&response.body) {
			Ok(data) => Ok(Some(data)),
			Err(error) => {
				log::warn!("{} {} returned an unreadable body: {}", method, path, error);
				Err(error.into())
			}
		}
	}

	async fn call_with_json<B: Serialize, R: DeserializeOwned>(
		&self,
		method: HttpMethod,
		path: &str,
		body: &B,
	) -> Result<Option<R>, ApiError> {
		let body = serde_json::to_string(body)?;
		self.call(method, path, Some(body)).await
	}

	pub async fn list_activities(&self) -> Result<ActivityList, ApiError> {
		let activities: Option<ActivityList> = self.call(HttpMethod::Get, &endpoints::activities(), None).await?;
		Ok(activities.unwrap_or_default())
	}

	pub async fn create_activity(&self, activity: &NewActivity) -> Result<Option<ApiMessage>, ApiError> {
		self.call_with_json(HttpMethod::Post, &endpoints::activities(), activity)
			.await
	}

	pub async fn update_activity(&self, name: &str, update: &ActivityUpdate) -> Result<Option<ApiMessage>, ApiError> {
		self.call_with_json(HttpMethod::Put, &endpoints::activity(name), update)
			.await
	}

	pub async fn delete_activity(&self, name: &str) -> Result<Option<ApiMessage>, ApiError> {
		self.call(HttpMethod::Delete, &endpoints::activity(name), None).await
	}

	pub async fn list_participants(&self, activity_name: &str) -> Result<Vec<String>, ApiError> {
		let participants: Option<Vec<String>> = self
			.call(HttpMethod::Get, &endpoints::participants(activity_name), None)
			.await?;
		Ok(participants.unwrap_or_default())
	}

	pub async fn remove_participant(&self, activity_name: &str, email: &str) -> Result<Option<ApiMessage>, ApiError> {
		self.call(HttpMethod::Delete, &endpoints::participant(activity_name, email), None)
			.await
	}

	pub async fn add_participant(&self, activity_name: &str, email: &str) -> Result<Option<ApiMessage>, ApiError> {
		self.call(HttpMethod::Post, &endpoints::signup(activity_name, email), None)
			.await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::{FakeDialogs, FakeTransport};
	use futures::executor::block_on;

	fn client() -> ApiClient<FakeTransport, FakeDialogs> {
		ApiClient::new(FakeTransport::default(), FakeDialogs::default(), ConsoleConfig::default())
	}

	#[test]
	fn token_header_is_sent_with_every_request() {
		let client = client();
		client.dialogs().queue_prompt(Some("letmein"));
		client.transport().respond(200, "{}");
		client.transport().respond(200, "[]");

		block_on(client.list_activities()).unwrap();
		block_on(client.list_participants("Chess Club")).unwrap();

		let requests = client.transport().requests();
		assert_eq!(requests.len(), 2);
		for request in requests.iter() {
			assert_eq!(request.header("X-ADMIN-TOKEN"), Some("letmein"));
		}
		assert_eq!(requests[1].url, "/admin/activities/Chess%20Club/participants");
	}

	#[test]
	fn token_prompt_happens_once_per_session() {
		let client = client();
		client.dialogs().queue_prompt(Some("letmein"));
		for _ in 0..5 {
			client.transport().respond(200, "{}");
		}

		for _ in 0..5 {
			block_on(client.list_activities()).unwrap();
		}

		assert_eq!(client.dialogs().prompts().len(), 1);
		assert_eq!(client.transport().requests().len(), 5);
	}

	#[test]
	fn no_content_response_skips_json_parsing() {
		let client = client();
		client.transport().respond(204, "this is not json");

		let result = block_on(client.delete_activity("Chess Club")).unwrap();

		assert_eq!(result, None);
		assert!(client.dialogs().alerts().is_empty());
		let requests = client.transport().requests();
		assert_eq!(requests[0].method, HttpMethod::Delete);
		assert_eq!(requests[0].body, None);
	}

	#[test]
	fn error_status_is_alerted_with_body() {
		let client = client();
		client.transport().respond(404, r#"{"detail":"Activity not found"}"#);

		let result = block_on(client.list_participants("Nope"));

		match result {
			Err(ApiError::Status { status, .. }) => assert_eq!(status, 404),
			other => panic!("expected status error, got {:?}", other.map(|_| ())),
		}
		let alerts = client.dialogs().alerts();
		assert_eq!(alerts.len(), 1);
		assert!(alerts[0].contains("404"));
		assert!(alerts[0].contains("Activity not found"));
	}

	#[test]
	fn network_failure_is_alerted() {
		let client = client();
		client.transport().fail("connection refused");

		let result = block_on(client.list_activities());

		assert!(matches!(result, Err(ApiError::Transport(_))));
		assert_eq!(client.dialogs().alerts().len(), 1);
		assert!(client.dialogs().alerts()[0].contains("connection refused"));
	}

	#[test]
	fn unreadable_success_body_is_an_error_without_alert() {
		let client = client();
		client.transport().respond(200, "<html>");

		let result = block_on(client.list_activities());

		assert!(matches!(result, Err(ApiError::Json(_))));
		assert!(client.dialogs().alerts().is_empty());
	}

	#[test]
	fn json_body_sets_content_type() {
		let client = client();
		client.transport().respond(201, r#"{"message":"Activity 'Robotics' created"}"#);
		let activity = NewActivity {
			name: String::from("Robotics"),
			description: String::from("Build robots"),
			schedule: String::from("Mondays"),
			max_participants: 8,
		};

		let message = block_on(client.create_activity(&activity)).unwrap();

		assert_eq!(message.map(|m| m.message), Some(String::from("Activity 'Robotics' created")));
		let request = &client.transport().requests()[0];
		assert_eq!(request.method, HttpMethod::Post);
		assert_eq!(request.header("content-type"), Some("application/json"));
		let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
		assert_eq!(body["max_participants"], 8);
	}

	#[test]
	fn add_participant_uses_signup_endpoint() {
		let client = client();
		client.transport().respond(200, r#"{"message":"Signed up"}"#);

		block_on(client.add_participant("Chess Club", "a@x.com")).unwrap();

		let request = &client.transport().requests()[0];
		assert_eq!(request.method, HttpMethod::Post);
		assert_eq!(request.url, "/activities/Chess%20Club/signup?email=a%40x.com");
	}
}
