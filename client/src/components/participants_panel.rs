use crate::app::BrowserConsole;
use crate::state::ConsoleState;
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Participants of the selected activity, each with a remove action. The list follows the most recently loaded
/// activities, so it updates along with every reload.
#[component]
pub fn ParticipantsPanel<G: Html>(ctx: Scope<'_>) -> View<G> {
	let state: &ConsoleState = use_context(ctx);

	let selected_participants = create_memo(ctx, {
		let activities = state.activities.clone();
		let participants_for = state.participants_for.clone();
		move || {
			let Some(name) = (*participants_for.get()).clone() else {
				return None;
			};
			let participants: Vec<(String, String)> = activities
				.get()
				.get(&name)
				.map(|activity| {
					activity
						.participants
						.iter()
						.map(|email| (name.clone(), email.clone()))
						.collect()
				})?;
			Some((name, participants))
		}
	});

	let panel_view = create_memo(ctx, move || {
		let Some((name, participants)) = (*selected_participants.get()).clone() else {
			return view! { ctx, };
		};
		participants_view(ctx, name, participants)
	});

	view! {
		ctx,
		(*panel_view.get())
	}
}

fn participants_view<G: Html>(ctx: Scope<'_>, name: String, participants: Vec<(String, String)>) -> View<G> {
	let console: &Rc<BrowserConsole> = use_context(ctx);
	let state: &ConsoleState = use_context(ctx);
	let participants = create_signal(ctx, participants);

	let add_handler = {
		let console = Rc::clone(console);
		let state = state.clone();
		let name = name.clone();
		move |_event: WebEvent| {
			let console = Rc::clone(&console);
			let state = state.clone();
			let name = name.clone();
			spawn_local(async move {
				match console.add_participant(&name).await {
					Ok(Some(activities)) => state.show_activities(activities),
					Ok(None) => (),
					Err(error) => state.report("Couldn't add the participant.", error),
				}
			});
		}
	};

	let close_handler = {
		let state = state.clone();
		move |_event: WebEvent| state.participants_for.set(None)
	};

	let empty_view = if participants.get().is_empty() {
		view! { ctx, p(class="muted") { "(none)" } }
	} else {
		view! { ctx, }
	};

	view! {
		ctx,
		div(id="participants", class="card") {
			strong { "Participants for " (name) }
			(empty_view)
			ul {
				Indexed(
					iterable=participants,
					view=|ctx, (activity_name, email)| {
						let remove_handler = {
							let console: &Rc<BrowserConsole> = use_context(ctx);
							let console = Rc::clone(console);
							let state: &ConsoleState = use_context(ctx);
							let state = state.clone();
							let activity_name = activity_name.clone();
							let email = email.clone();
							move |_event: WebEvent| {
								let console = Rc::clone(&console);
								let state = state.clone();
								let activity_name = activity_name.clone();
								let email = email.clone();
								spawn_local(async move {
									match console.remove_participant(&activity_name, &email).await {
										Ok(Some(activities)) => state.show_activities(activities),
										Ok(None) => (),
										Err(error) => state.report("Couldn't remove the participant.", error),
									}
								});
							}
						};
						view! {
							ctx,
							li {
								(email)
								" "
								button(type="button", on:click=remove_handler) { "Remove" }
							}
						}
					}
				)
			}
			div(class="actions") {
				button(type="button", on:click=add_handler) { "Add Participant" }
				button(type="button", on:click=close_handler) { "Close" }
			}
		}
	}
}
