//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, backend address, backend health
//! - `SubmitButton`: label, or spinner while loading
//! - `ErrorBanner`: the view's error message
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `InputBox`: text entry, emits `Changed` / `Submit`
//! - `SummaryPanel`: scrollable summary; scroll state in `SummaryPanelState`
//!
//! Components receive external data as props (fields or constructor
//! arguments) rather than reading `App` directly:
//!
//! ```rust,ignore
//! SubmitButton::new(app.view.is_loading(), spinner_frame).render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── submit_button.rs
//! ├── error_banner.rs
//! ├── summary_panel.rs
//! └── input_box/       (text entry, cursor, wrapping)
//! ```

pub mod error_banner;
pub mod input_box;
pub mod submit_button;
pub mod summary_panel;
pub mod title_bar;

pub use error_banner::ErrorBanner;
pub use input_box::{InputBox, InputEvent};
pub use submit_button::SubmitButton;
pub use summary_panel::{SummaryPanel, SummaryPanelState};
pub use title_bar::TitleBar;
