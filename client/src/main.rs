use actions::AdminConsole;
use api::ApiClient;
use app::{reload, App};
use config::ConsoleConfig;
use dialogs::BrowserDialogs;
use state::ConsoleState;
use std::rc::Rc;
use sycamore::prelude::*;
use transport::FetchTransport;

mod actions;
mod api;
mod app;
mod components;
mod config;
mod dialogs;
mod error;
mod forms;
mod render;
mod session;
mod state;
mod transport;

#[cfg(test)]
mod test_support;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let config = ConsoleConfig::from_page();
	log::debug!("Using API base {:?}", config.api_base);

	let client = ApiClient::new(FetchTransport, BrowserDialogs, config);
	let console = Rc::new(AdminConsole::new(client));
	let state = ConsoleState::new();

	reload(Rc::clone(&console), state.clone());

	sycamore::render(|ctx| {
		provide_context(ctx, console);
		provide_context(ctx, state);
		view! { ctx, App }
	});
}
