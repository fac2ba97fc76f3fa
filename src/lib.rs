//! # weft
//!
//! A revision-synced, declarative widget-tree web UI framework for small
//! devices.
//!
//! weft lets a resource-constrained device expose an interactive web page: a
//! tree of widgets (text, buttons, sliders, inputs) rendered once as HTML
//! and thereafter kept in sync with device state through lightweight
//! polling. Each poll carries the client's last-seen revision; the server
//! answers with exactly the elements that changed since — never the whole
//! page.
//!
//! ## Core Systems
//!
//! - **[`escape`]** — quoting/HTML-escaping filter for values on their way out
//! - **[`revision`]** — committed/pending revision clock behind minimal diffs
//! - **[`driver`]** — transport abstraction (header/content emission,
//!   argument retrieval)
//! - **[`dom`]** — slotmap-backed widget tree with flags, revisions, and id
//!   queries
//! - **[`widget`]** — object-safe widget trait and the property index set
//! - **[`widgets`]** — built-in widgets: StaticHtml, TextSpan, TextInput,
//!   Slider, ColorPicker, PushButton, CheckButton, OptionSelect, RadioGroup,
//!   Group, HideableGroup, ConnectionIndicator
//! - **[`sync`]** — the incremental-update serializer
//! - **[`page`]** — document shell, embedded poll script, request handling
//! - **[`testing`]** — headless capture driver and exchange pilot
//!
//! ## A minimal page
//!
//! ```ignore
//! use weft::page::{Page, PageConfig};
//! use weft::widgets::{Slider, StaticHtml};
//!
//! let mut page = Page::new(PageConfig::new().with_title("Dimmer"));
//! let root = page.root();
//! page.insert(root, StaticHtml::new("<h1>Dimmer</h1>"));
//! page.insert(root, Slider::new("level", 0, 100, 50));
//!
//! // GET  -> page.render(&mut driver)
//! // POST -> page.handle_request(&mut driver, None)
//! ```

// Foundation
pub mod driver;
pub mod escape;
pub mod revision;

// Core systems
pub mod dom;
pub mod sync;

// Widget system
pub mod widget;
pub mod widgets;

// Application
pub mod page;

// Testing support
pub mod testing;
