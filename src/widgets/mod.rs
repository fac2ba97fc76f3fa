//! Built-in widgets: static markup, spans, inputs, buttons, groups.

pub mod check_button;
pub mod color_picker;
pub mod connection;
pub mod group;
pub mod option_select;
pub mod push_button;
pub mod radio_group;
pub mod slider;
pub mod span;
pub mod static_html;
pub mod text_input;

pub use check_button::CheckButton;
pub use color_picker::ColorPicker;
pub use connection::ConnectionIndicator;
pub use group::{Group, HideableGroup};
pub use option_select::OptionSelect;
pub use push_button::PushButton;
pub use radio_group::RadioGroup;
pub use slider::Slider;
pub use span::TextSpan;
pub use static_html::StaticHtml;
pub use text_input::TextInput;
