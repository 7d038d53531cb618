use crate::app::BrowserConsole;
use crate::forms::ActivityForm;
use crate::state::ConsoleState;
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn CreateActivityForm<G: Html>(ctx: Scope<'_>) -> View<G> {
	let entered_name_signal = create_signal(ctx, String::new());
	let entered_description_signal = create_signal(ctx, String::new());
	let entered_schedule_signal = create_signal(ctx, String::new());
	let entered_max_signal = create_signal(ctx, String::new());

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();

		let form = ActivityForm {
			name: (*entered_name_signal.get()).clone(),
			description: (*entered_description_signal.get()).clone(),
			schedule: (*entered_schedule_signal.get()).clone(),
			max_participants: (*entered_max_signal.get()).clone(),
		};

		spawn_local_scoped(ctx, async move {
			let console: &Rc<BrowserConsole> = use_context(ctx);
			let state: &ConsoleState = use_context(ctx);
			if let Err(error) = console.create(&form).await {
				state.report("Couldn't create the activity.", error);
				return;
			}
			entered_name_signal.set(String::new());
			entered_description_signal.set(String::new());
			entered_schedule_signal.set(String::new());
			entered_max_signal.set(String::new());

			match console.load().await {
				Ok(activities) => state.show_activities(activities),
				Err(error) => state.report("Couldn't load activities.", error),
			}
		});
	};

	view! {
		ctx,
		form(id="create-form", on:submit=submit_handler) {
			h2 { "New Activity" }
			input(id="name", placeholder="Name", bind:value=entered_name_signal)
			input(id="description", placeholder="Description", bind:value=entered_description_signal)
			input(id="schedule", placeholder="Schedule", bind:value=entered_schedule_signal)
			input(id="max", type="number", placeholder="Max participants", bind:value=entered_max_signal)
			button(type="submit") { "Create" }
		}
	}
}
