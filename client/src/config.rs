use web_sys::window;

pub const DEFAULT_TOKEN: &str = "secret-token";
pub const DEFAULT_MAX_PARTICIPANTS: i64 = 10;

/// Settings for the console, read from `<meta>` tags in the host page
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsoleConfig {
	/// Prefix for all API paths. Empty means the API is hosted at the same origin as the page.
	pub api_base: String,
	pub default_token: String,
	pub default_max_participants: i64,
}

impl Default for ConsoleConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			default_token: String::from(DEFAULT_TOKEN),
			default_max_participants: DEFAULT_MAX_PARTICIPANTS,
		}
	}
}

impl ConsoleConfig {
	/// Reads the configuration from the current page, falling back to defaults for anything not set
	pub fn from_page() -> Self {
		let mut config = Self::default();
		if let Some(api_base) = meta_content("admin-api-base") {
			config.api_base = api_base.trim_end_matches('/').to_string();
		}
		if let Some(default_token) = meta_content("admin-default-token") {
			if !default_token.is_empty() {
				config.default_token = default_token;
			}
		}
		config
	}

	pub fn url_for(&self, path: &str) -> String {
		format!("{}{}", self.api_base, path)
	}
}

fn meta_content(name: &str) -> Option<String> {
	let document = window()?.document()?;
	let selector = format!("meta[name=\"{}\"]", name);
	let element = document.query_selector(&selector).ok()??;
	element.get_attribute("content")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_targets_same_origin() {
		let config = ConsoleConfig::default();
		assert_eq!(config.url_for("/admin/activities"), "/admin/activities");
		assert_eq!(config.default_token, "secret-token");
		assert_eq!(config.default_max_participants, 10);
	}

	#[test]
	fn api_base_prefixes_paths() {
		let config = ConsoleConfig {
			api_base: String::from("https://school.example"),
			..Default::default()
		};
		assert_eq!(
			config.url_for("/admin/activities"),
			"https://school.example/admin/activities"
		);
	}
}
