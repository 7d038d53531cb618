pub mod activity_card;
pub mod create_form;
pub mod edit_form;
pub mod error_display;
pub mod participants_panel;
