use axum::extract::State;
use maud::{Markup, html};
use std::sync::Arc;

use crate::{ApiState, views::layout};

/// GET /
///
/// The page shell on its own: generate panel plus, once a timetable exists,
/// the tab bar.
#[axum::debug_handler]
pub async fn index(State(state): State<Arc<ApiState>>) -> Markup {
    let last = state.generation.last().await;
    layout::page(last.as_ref(), None, None, html! {})
}
