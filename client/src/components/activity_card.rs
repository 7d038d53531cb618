use crate::app::BrowserConsole;
use crate::render::ActivityCard;
use crate::state::ConsoleState;
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Renders a single activity with its actions. Handlers run on the page's event loop rather than the card's scope,
/// since a successful action reloads the list and replaces this card.
pub fn activity_card_view<G: Html>(ctx: Scope<'_>, card: ActivityCard) -> View<G> {
	let console: &Rc<BrowserConsole> = use_context(ctx);
	let state: &ConsoleState = use_context(ctx);

	let view_participants_handler = {
		let console = Rc::clone(console);
		let state = state.clone();
		let name = card.name.clone();
		move |_event: WebEvent| {
			let console = Rc::clone(&console);
			let state = state.clone();
			let name = name.clone();
			spawn_local(async move {
				match console.view_participants(&name).await {
					Ok(_) => state.participants_for.set(Some(name)),
					Err(error) => state.report("Couldn't load participants.", error),
				}
			});
		}
	};

	let edit_handler = {
		let state = state.clone();
		let name = card.name.clone();
		move |_event: WebEvent| {
			state.editing.set(Some(name.clone()));
		}
	};

	let delete_handler = {
		let console = Rc::clone(console);
		let state = state.clone();
		let name = card.name.clone();
		move |_event: WebEvent| {
			let console = Rc::clone(&console);
			let state = state.clone();
			let name = name.clone();
			spawn_local(async move {
				match console.delete(&name).await {
					Ok(Some(activities)) => {
						if state.editing.get().as_deref() == Some(name.as_str()) {
							state.editing.set(None);
						}
						if state.participants_for.get().as_deref() == Some(name.as_str()) {
							state.participants_for.set(None);
						}
						state.show_activities(activities);
					}
					Ok(None) => (),
					Err(error) => state.report("Couldn't delete the activity.", error),
				}
			});
		}
	};

	let ActivityCard {
		key,
		name,
		schedule,
		description,
		..
	} = card.clone();
	let participants_label = card.participants_label();
	let card_id = format!("activity_{}", key);

	view! {
		ctx,
		div(class="card", id=card_id) {
			strong { (name) }
			div(class="muted") { (schedule) }
			p { (description) }
			div { (participants_label) }
			div(class="actions") {
				button(type="button", on:click=view_participants_handler) { "View Participants" }
				button(type="button", on:click=edit_handler) { "Edit" }
				button(type="button", on:click=delete_handler) { "Delete" }
			}
		}
	}
}
