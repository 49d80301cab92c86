//! # Gridloom
//!
//! A text-grid compositing engine for terminal UIs.
//!
//! Gridloom builds rectangular grids of character cells ("panels"),
//! decorates them with borders and an optional scrollbar, pours free-form
//! text into them width-awarely, and composes nested panels — z-ordered,
//! clipped, recursively — into a single flattened grid ready to be printed
//! as lines of text. It is the layout/rendering core beneath a widget
//! layer: no terminal I/O, no event loop, no frame scheduling.
//!
//! ## Core Concepts
//!
//! - **Three-state cells**: a glyph, a blank resolved against a background
//!   symbol, or the continuation column of a double-width glyph
//! - **Value semantics**: rendering never mutates a panel; every pass
//!   composes fresh grids
//! - **Pluggable width rules**: all width-aware placement goes through an
//!   injectable [`SymbolRuler`]
//! - **Defined degradation**: borders too wide for their panel or a
//!   scrollbar without room fall back to simpler rendering instead of
//!   failing
//!
//! ## Example
//!
//! ```rust
//! use gridloom::{Borders, Panel, Rect};
//!
//! let panel = Panel::new(Rect::from_size(7, 3))
//!     .unwrap()
//!     .with_borders(Borders::light())
//!     .with_content("hello");
//!
//! assert_eq!(panel.render(), "┌─────┐\n│hello│\n└─────┘");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod border;
mod error;
mod grid;
mod layout;
mod panel;
mod ruler;
mod scrollbar;

pub use border::Borders;
pub use error::Error;
pub use grid::{Cell, Modifiers, Rgb, Style, Symbol};
pub use layout::{Insets, Rect};
pub use panel::{Panel, Scroll};
pub use ruler::{default_symbol_ruler, SymbolRuler};
