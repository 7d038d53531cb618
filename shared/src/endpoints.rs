//! Paths of the admin REST surface. Activity names and participant emails are percent-encoded wherever they're
//! embedded in a path or query string.

use urlencoding::encode;

/// Path for listing and creating activities
pub fn activities() -> String {
	String::from("/admin/activities")
}

/// Path for updating or deleting a single activity
pub fn activity(name: &str) -> String {
	format!("/admin/activities/{}", encode(name))
}

/// Path for listing the participants of an activity
pub fn participants(activity_name: &str) -> String {
	format!("/admin/activities/{}/participants", encode(activity_name))
}

/// Path for removing a single participant from an activity
pub fn participant(activity_name: &str, email: &str) -> String {
	format!(
		"/admin/activities/{}/participants?email={}",
		encode(activity_name),
		encode(email)
	)
}

/// Path of the public signup endpoint, used to add a participant to an activity
pub fn signup(activity_name: &str, email: &str) -> String {
	format!("/activities/{}/signup?email={}", encode(activity_name), encode(email))
}

/// Encodes an activity name for embedding as an identifier (e.g. a list key)
pub fn encode_name(name: &str) -> String {
	encode(name).into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_with_spaces_are_encoded() {
		assert_eq!(activity("Chess Club"), "/admin/activities/Chess%20Club");
		assert_eq!(participants("Chess Club"), "/admin/activities/Chess%20Club/participants");
	}

	#[test]
	fn participant_email_is_encoded_in_query() {
		assert_eq!(
			participant("Math Club", "a+b@x.com"),
			"/admin/activities/Math%20Club/participants?email=a%2Bb%40x.com"
		);
		assert_eq!(signup("Art & Craft", "a@x.com"), "/activities/Art%20%26%20Craft/signup?email=a%40x.com");
	}

	#[test]
	fn slashes_in_names_stay_in_one_segment() {
		assert_eq!(activity("A/B"), "/admin/activities/A%2FB");
	}
}
