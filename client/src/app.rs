use crate::actions::AdminConsole;
use crate::components::activity_card::activity_card_view;
use crate::components::create_form::CreateActivityForm;
use crate::components::edit_form::EditActivityForm;
use crate::components::error_display::ErrorDisplay;
use crate::components::participants_panel::ParticipantsPanel;
use crate::dialogs::BrowserDialogs;
use crate::render::render_activities;
use crate::state::ConsoleState;
use crate::transport::FetchTransport;
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

pub type BrowserConsole = AdminConsole<FetchTransport, BrowserDialogs>;

/// Loads the activity list and shows it
pub fn reload(console: Rc<BrowserConsole>, state: ConsoleState) {
	spawn_local(async move {
		match console.load().await {
			Ok(activities) => state.show_activities(activities),
			Err(error) => state.report("Couldn't load activities.", error),
		}
	});
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let console: &Rc<BrowserConsole> = use_context(ctx);
	let state: &ConsoleState = use_context(ctx);

	let cards = create_memo(ctx, {
		let activities = state.activities.clone();
		move || render_activities(&activities.get())
	});

	let reload_handler = {
		let console = Rc::clone(console);
		let state = state.clone();
		move |_event: WebEvent| reload(Rc::clone(&console), state.clone())
	};

	view! {
		ctx,
		ErrorDisplay
		h1 { "Activities Admin" }
		CreateActivityForm
		EditActivityForm
		div(class="actions") {
			button(type="button", on:click=reload_handler) { "Reload" }
		}
		div(id="activities") {
			Keyed(
				iterable=cards,
				key=|card| card.key.clone(),
				view=|ctx, card| activity_card_view(ctx, card)
			)
		}
		ParticipantsPanel
	}
}
