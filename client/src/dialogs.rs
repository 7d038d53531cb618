// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::window;

/// The blocking browser dialogs used to interact with the user
pub trait Dialogs {
	/// Asks the user for text. Returns `None` when the user cancels.
	fn prompt(&self, message: &str) -> Option<String>;

	fn alert(&self, message: &str);

	/// Asks the user to confirm an action. Returns `false` if the user declines or no answer can be obtained.
	fn confirm(&self, message: &str) -> bool;
}

/// Dialogs shown through the browser window (`prompt`, `alert`, `confirm`)
#[derive(Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
	fn prompt(&self, message: &str) -> Option<String> {
		let window = window()?;
		match window.prompt_with_message(message) {
			Ok(response) => response,
			Err(error) => {
				log::warn!("Failed to show prompt dialog: {:?}", error);
				None
			}
		}
	}

	fn alert(&self, message: &str) {
		let Some(window) = window() else {
			log::warn!("No browser window for alert: {}", message);
			return;
		};
		if let Err(error) = window.alert_with_message(message) {
			log::warn!("Failed to show alert dialog: {:?}", error);
		}
	}

	fn confirm(&self, message: &str) -> bool {
		let Some(window) = window() else {
			return false;
		};
		match window.confirm_with_message(message) {
			Ok(confirmed) => confirmed,
			Err(error) => {
				log::warn!("Failed to show confirmation dialog: {:?}", error);
				false
			}
		}
	}
}
