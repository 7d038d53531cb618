use activity_admin_shared::endpoints::encode_name;
use activity_admin_shared::messages::activities::{Activity, ActivityList};

/// Everything shown on one activity's card
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivityCard {
	/// The URL-encoded activity name, used to identify the card
	pub key: String,
	pub name: String,
	pub schedule: String,
	pub description: String,
	pub capacity: String,
}

impl ActivityCard {
	pub fn new(name: &str, activity: &Activity) -> Self {
		Self {
			key: encode_name(name),
			name: name.to_string(),
			schedule: activity.schedule.clone(),
			description: activity.description.clone(),
			capacity: activity.capacity_ratio(),
		}
	}

	pub fn participants_label(&self) -> String {
		format!("Participants: {}", self.capacity)
	}
}

/// Builds the cards for the full activity list. The list is always rebuilt from scratch.
pub fn render_activities(data: &ActivityList) -> Vec<ActivityCard> {
	data.iter()
		.map(|(name, activity)| ActivityCard::new(name, activity))
		.collect()
}
