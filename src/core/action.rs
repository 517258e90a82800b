//! # Actions
//!
//! Everything that can happen in naiken becomes an `Action`.
//! User presses Enter on the form? That's `Action::AddRecord(draft)`.
//! Picks an entry in the delete overlay? That's `Action::DeleteSelection`.
//!
//! The `update()` function takes the current state and an action, applies
//! the mutation, and returns an `Effect` telling the view layer what to
//! do next. Each action fully completes before the next one is read;
//! on error the store is left untouched and only the status message
//! changes.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```

use log::info;

use crate::core::record::RecordDraft;
use crate::core::report;
use crate::core::state::App;
use crate::core::store::StoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Submit the entry form.
    AddRecord(RecordDraft),
    /// Delete the record behind a `"{id}: {name}"` selection label.
    DeleteSelection(String),
    /// Drop every record and restart ids at 1.
    ClearAll,
    Quit,
}

/// What the view layer should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A mutation succeeded; return the form to its configured defaults.
    ResetForm,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::AddRecord(draft) => match app.store.add(draft) {
            Ok(record) => {
                info!(
                    "Added record #{}: {} (score {:.1})",
                    record.id, record.name, record.score
                );
                app.status_message = format!("Added {} (score {:.1})", record.name, record.score);
                Effect::ResetForm
            }
            Err(StoreError::EmptyName) => {
                app.status_message = String::from("Enter an apartment name first");
                Effect::None
            }
            Err(e) => {
                app.status_message = e.to_string();
                Effect::None
            }
        },
        Action::DeleteSelection(label) => {
            let Some(id) = report::parse_choice(&label) else {
                info!("Malformed delete selection: {label:?}");
                app.status_message = String::from("Invalid selection");
                return Effect::None;
            };
            match app.store.remove(id) {
                Ok(record) => {
                    info!("Deleted record #{}: {}", record.id, record.name);
                    app.status_message = format!("Deleted {}", record.name);
                    Effect::None
                }
                Err(e) => {
                    app.status_message = e.to_string();
                    Effect::None
                }
            }
        }
        Action::ClearAll => {
            let removed = app.store.len();
            app.store.clear();
            info!("Cleared {removed} records");
            app.status_message = String::from("Cleared all apartments");
            Effect::ResetForm
        }
        Action::Quit => Effect::Quit,
    }
}
