//! Update function for the Elm-style architecture
//!
//! All state transformations on an [`Editable`] flow through [`update`].

use crate::commands::Cmd;
use crate::editable::{Editable, EditableMsg};

/// Apply one message; returns the side effects for the render adapter.
pub fn update(editable: &mut Editable, msg: EditableMsg) -> Option<Cmd> {
    tracing::trace!(msg = msg.name(), "update");

    match msg {
        EditableMsg::Edit { source } => {
            if !editable.edit(source) {
                return None;
            }
            let select_all =
                editable.config().select_on_focus || source.is_some_and(|s| s.selects_all());
            Some(Cmd::batch(vec![
                Cmd::FocusInput { select_all },
                Cmd::Redraw,
            ]))
        }

        EditableMsg::SetDraft { text } => editable.set_draft(&text).then_some(Cmd::Redraw),

        EditableMsg::Submit => editable.submit().then_some(Cmd::Redraw),

        EditableMsg::Cancel => editable.cancel().then_some(Cmd::Redraw),

        EditableMsg::Dismiss => editable.handle_dismiss().then_some(Cmd::Redraw),
    }
}
