//! Board Component
//!
//! The surface cards are laid out on.

use leptos::prelude::*;

#[component]
pub fn Board(children: Children) -> impl IntoView {
    view! {
        <div class="board" data-testid="board" data-cy="board">
            {children()}
        </div>
    }
}
