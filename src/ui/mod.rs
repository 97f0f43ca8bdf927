//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state and the keyboard event loop
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (display, keypad legend, history, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Calculator`] and call [`App::run`] to start the event loop.
//!
//! [`Calculator`]: crate::calc::engine::Calculator
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
