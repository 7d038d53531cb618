use crate::app::BrowserConsole;
use crate::forms::ActivityEditForm;
use crate::state::ConsoleState;
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Form for changing an existing activity. Only shown while an activity is selected for editing; blank fields keep
/// their current values.
#[component]
pub fn EditActivityForm<G: Html>(ctx: Scope<'_>) -> View<G> {
	let state: &ConsoleState = use_context(ctx);

	let entered_description_signal = create_signal(ctx, String::new());
	let entered_schedule_signal = create_signal(ctx, String::new());
	let entered_max_signal = create_signal(ctx, String::new());

	let clear_fields = move || {
		entered_description_signal.set(String::new());
		entered_schedule_signal.set(String::new());
		entered_max_signal.set(String::new());
	};

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();

		let state: &ConsoleState = use_context(ctx);
		let Some(name) = (*state.editing.get()).clone() else {
			return;
		};
		let form = ActivityEditForm {
			description: (*entered_description_signal.get()).clone(),
			schedule: (*entered_schedule_signal.get()).clone(),
			max_participants: (*entered_max_signal.get()).clone(),
		};

		spawn_local_scoped(ctx, async move {
			let console: &Rc<BrowserConsole> = use_context(ctx);
			let state: &ConsoleState = use_context(ctx);
			let sent = match console.update(&name, &form).await {
				Ok(sent) => sent,
				Err(error) => {
					state.report("Couldn't update the activity.", error);
					return;
				}
			};
			clear_fields();
			state.editing.set(None);
			if !sent {
				return;
			}

			match console.load().await {
				Ok(activities) => state.show_activities(activities),
				Err(error) => state.report("Couldn't load activities.", error),
			}
		});
	};

	let cancel_handler = move |_event: WebEvent| {
		let state: &ConsoleState = use_context(ctx);
		clear_fields();
		state.editing.set(None);
	};

	let form_view = create_memo(ctx, {
		let editing = state.editing.clone();
		move || {
			let Some(name) = (*editing.get()).clone() else {
				return view! { ctx, };
			};
			view! {
				ctx,
				form(id="edit-form", on:submit=submit_handler) {
					h2 { "Edit " (name) }
					input(placeholder="Description", bind:value=entered_description_signal)
					input(placeholder="Schedule", bind:value=entered_schedule_signal)
					input(type="number", placeholder="Max participants", bind:value=entered_max_signal)
					button(type="submit") { "Save" }
					button(type="button", on:click=cancel_handler) { "Cancel" }
				}
			}
		}
	});

	view! {
		ctx,
		(*form_view.get())
	}
}
