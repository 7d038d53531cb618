// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::error_display::ErrorData;
use crate::error::ApiError;
use activity_admin_shared::messages::activities::ActivityList;
use sycamore::prelude::*;

/// Page-wide state shared by all components
#[derive(Clone)]
pub struct ConsoleState {
	pub activities: RcSignal<ActivityList>,
	/// The activity whose participant list is open
	pub participants_for: RcSignal<Option<String>>,
	/// The activity being edited
	pub editing: RcSignal<Option<String>>,
	pub errors: RcSignal<Vec<ErrorData>>,
}

impl ConsoleState {
	pub fn new() -> Self {
		Self {
			activities: create_rc_signal(ActivityList::new()),
			participants_for: create_rc_signal(None),
			editing: create_rc_signal(None),
			errors: create_rc_signal(Vec::new()),
		}
	}

	/// Shows a freshly loaded activity list
	pub fn show_activities(&self, activities: ActivityList) {
		self.activities.set(activities);
	}

	/// Records a failed workflow in the page error list. Errors the user already saw in an alert are only logged.
	pub fn report(&self, message: &'static str, error: ApiError) {
		log::warn!("{} {}", message, error);
		if !error.was_alerted() {
			self.errors.modify().push(ErrorData::new_with_error(message, error));
		}
	}
}

impl Default for ConsoleState {
	fn default() -> Self {
		Self::new()
	}
}
