// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An activity as stored by the backend. The activity's name isn't part of the record; it's the key under which the
/// record is listed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Activity {
	pub description: String,
	pub schedule: String,
	#[serde(default)]
	pub participants: Vec<String>,
	pub max_participants: i64,
}

impl Activity {
	/// Gets the participant count and capacity formatted as a ratio (e.g. "1/10")
	pub fn capacity_ratio(&self) -> String {
		format!("{}/{}", self.participants.len(), self.max_participants)
	}
}

/// The full list of activities, keyed by activity name, in the order the backend lists them
pub type ActivityList = IndexMap<String, Activity>;

/// Information required for adding a new activity
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NewActivity {
	pub name: String,
	pub description: String,
	pub schedule: String,
	pub max_participants: i64,
}

/// Changes to an existing activity. Fields left as `None` are omitted and remain unchanged.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActivityUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub schedule: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_participants: Option<i64>,
}

impl ActivityUpdate {
	pub fn is_empty(&self) -> bool {
		self.description.is_none() && self.schedule.is_none() && self.max_participants.is_none()
	}
}
