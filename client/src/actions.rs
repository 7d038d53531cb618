use crate::api::ApiClient;
use crate::dialogs::Dialogs;
use crate::error::ApiError;
use crate::forms::{ActivityEditForm, ActivityForm};
use crate::transport::Transport;
use activity_admin_shared::messages::activities::ActivityList;

/// The workflows behind each button in the console. Every modifying workflow ends by reloading the full activity
/// list; if any request fails, the workflow stops there and the list isn't reloaded.
///
/// Creating and updating only send the change. The form that produced it is cleared by the caller once the change is
/// accepted, and the caller reloads afterward.
///
/// Workflows that need confirmation or extra input return `Ok(None)` when the user backs out. No request is sent in
/// that case.
pub struct AdminConsole<T, D> {
	client: ApiClient<T, D>,
}

impl<T: Transport, D: Dialogs> AdminConsole<T, D> {
	pub fn new(client: ApiClient<T, D>) -> Self {
		Self { client }
	}

	#[cfg(test)]
	pub fn client(&self) -> &ApiClient<T, D> {
		&self.client
	}

	pub async fn load(&self) -> Result<ActivityList, ApiError> {
		let activities = self.client.list_activities().await?;
		log::debug!("Loaded {} activities", activities.len());
		Ok(activities)
	}

	pub async fn create(&self, form: &ActivityForm) -> Result<(), ApiError> {
		let activity = form.to_new_activity(self.client.config().default_max_participants);
		self.client.create_activity(&activity).await?;
		log::info!("Created activity {}", activity.name);
		Ok(())
	}

	/// Sends the filled-in fields of the edit form. Returns `false` without sending anything when every field is blank.
	pub async fn update(&self, name: &str, form: &ActivityEditForm) -> Result<bool, ApiError> {
		let update = form.to_update();
		if update.is_empty() {
			return Ok(false);
		}
		self.client.update_activity(name, &update).await?;
		log::info!("Updated activity {}", name);
		Ok(true)
	}

	pub async fn delete(&self, name: &str) -> Result<Option<ActivityList>, ApiError> {
		if !self.client.dialogs().confirm(&format!("Delete activity \"{}\"?", name)) {
			return Ok(None);
		}
		self.client.delete_activity(name).await?;
		log::info!("Deleted activity {}", name);
		self.load().await.map(Some)
	}

	/// Fetches the participants of an activity and shows them in an alert
	pub async fn view_participants(&self, name: &str) -> Result<Vec<String>, ApiError> {
		let participants = self.client.list_participants(name).await?;
		self.client
			.dialogs()
			.alert(&participants_alert_text(name, &participants));
		Ok(participants)
	}

	pub async fn remove_participant(&self, name: &str, email: &str) -> Result<Option<ActivityList>, ApiError> {
		if !self
			.client
			.dialogs()
			.confirm(&format!("Remove {} from {}?", email, name))
		{
			return Ok(None);
		}
		self.client.remove_participant(name, email).await?;
		log::info!("Removed {} from {}", email, name);
		self.load().await.map(Some)
	}

	/// Asks for an email address and signs that participant up for the activity
	pub async fn add_participant(&self, name: &str) -> Result<Option<ActivityList>, ApiError> {
		let email = match self.client.dialogs().prompt(&format!("Email of the participant to add to {}", name)) {
			Some(email) if !email.trim().is_empty() => email.trim().to_string(),
			_ => return Ok(None),
		};
		self.client.add_participant(name, &email).await?;
		log::info!("Added {} to {}", email, name);
		self.load().await.map(Some)
	}
}

pub fn participants_alert_text(name: &str, participants: &[String]) -> String {
	let list = if participants.is_empty() {
		String::from("(none)")
	} else {
		participants.join("\n")
	};
	format!("Participants for {}:\n\n{}", name, list)
}
