//! UI Components
//!
//! Reusable Leptos components.

mod board;
mod card_add_new;
mod card_view;
mod status_line;

pub use board::Board;
pub use card_add_new::CardAddNew;
pub use card_view::CardView;
pub use status_line::StatusLine;
