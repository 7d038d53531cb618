use activity_admin_shared::messages::activities::{ActivityUpdate, NewActivity};

/// Raw values entered in the new activity form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActivityForm {
	pub name: String,
	pub description: String,
	pub schedule: String,
	pub max_participants: String,
}

impl ActivityForm {
	/// Builds the activity to create. Text fields are trimmed. A capacity that doesn't start with a number, or is
	/// zero, is replaced with `default_max`.
	pub fn to_new_activity(&self, default_max: i64) -> NewActivity {
		let max_participants = match parse_leading_int(&self.max_participants) {
			Some(max) if max != 0 => max,
			_ => default_max,
		};
		NewActivity {
			name: self.name.trim().to_string(),
			description: self.description.trim().to_string(),
			schedule: self.schedule.trim().to_string(),
			max_participants,
		}
	}
}

/// Raw values entered in the edit form for an existing activity
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActivityEditForm {
	pub description: String,
	pub schedule: String,
	pub max_participants: String,
}

impl ActivityEditForm {
	/// Builds the update to send. Blank fields (and a capacity that isn't a number) are left out so the backend keeps
	/// the current values.
	pub fn to_update(&self) -> ActivityUpdate {
		ActivityUpdate {
			description: non_empty(&self.description),
			schedule: non_empty(&self.schedule),
			max_participants: parse_leading_int(&self.max_participants),
		}
	}
}

fn non_empty(value: &str) -> Option<String> {
	let value = value.trim();
	if value.is_empty() {
		None
	} else {
		Some(value.to_string())
	}
}

/// Parses the integer at the start of the input, ignoring leading whitespace and anything after the digits
/// (so "12 people" is 12).
pub fn parse_leading_int(input: &str) -> Option<i64> {
	let input = input.trim_start();
	let (negative, digits) = match input.as_bytes().first() {
		Some(b'-') => (true, &input[1..]),
		Some(b'+') => (false, &input[1..]),
		_ => (false, input),
	};
	let digit_count = digits.bytes().take_while(|c| c.is_ascii_digit()).count();
	if digit_count == 0 {
		return None;
	}
	let value: i64 = digits[..digit_count].parse().ok()?;
	Some(if negative { -value } else { value })
}
