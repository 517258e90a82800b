//! # TUI Components
//!
//! All UI components of the terminal interface, one file per component
//! (state, events, rendering, and tests co-located).
//!
//! Stateless, props-based:
//! - `TitleBar`: app name, record count, last status message
//!
//! Stateful, event-driven:
//! - `Form`: the apartment entry form (field buffers + focus)
//! - `Comparison`: ranked table + summary statistics (scroll state)
//! - `DeletePicker`: overlay for removing a record (selection state)
//!
//! Components receive external data as props rather than reading global
//! state, and compose in `ui::draw_ui`.

pub mod comparison;
pub mod delete_picker;
pub mod form;
pub mod title_bar;

pub use comparison::{Comparison, ComparisonState};
pub use delete_picker::{DeletePicker, DeletePickerState, PickerEvent};
pub use form::{Form, FormEvent};
pub use title_bar::TitleBar;
