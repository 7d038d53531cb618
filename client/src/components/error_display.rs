// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::state::ConsoleState;
use std::fmt::Display;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, PartialEq)]
pub struct ErrorData {
	message: &'static str,
	error: Option<String>,
}

impl ErrorData {
	/// Creates a new data object with an error object to render
	pub fn new_with_error(message: &'static str, error: impl Display) -> Self {
		let error = Some(format!("{error}"));
		Self { message, error }
	}

	pub fn to_view<G: Html>(&self, ctx: Scope<'_>, dismiss_handler: impl Fn(WebEvent) + 'static) -> View<G> {
		let message = self.message;
		let details_view = match self.error.clone() {
			Some(error_details) => view! {
				ctx,
				span(class="page_error_entry_details") { (error_details) }
			},
			None => view! { ctx, },
		};
		view! {
			ctx,
			li(class="page_error_entry") {
				span(class="page_error_entry_text") { (message) }
				(details_view)
				span(class="page_error_entry_dismiss") {
					a(class="click", on:click=dismiss_handler) { "[X]" }
				}
			}
		}
	}
}

#[component]
pub fn ErrorDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let state: &ConsoleState = use_context(ctx);
	let errors = create_memo(ctx, {
		let errors = state.errors.clone();
		move || (*errors.get()).clone()
	});

	view! {
		ctx,
		ul(id="page_errors") {
			Indexed(
				iterable=errors,
				view=|ctx, error| {
					let dismiss_handler = {
						let error = error.clone();
						let state: &ConsoleState = use_context(ctx);
						let errors = state.errors.clone();
						move |_event: WebEvent| {
							let index = errors.get().iter().position(|check_error| error == *check_error);
							if let Some(index) = index {
								errors.modify().remove(index);
							}
						}
					};
					error.to_view(ctx, dismiss_handler)
				}
			)
		}
	}
}
