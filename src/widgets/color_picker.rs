//! ColorPicker widget: an `<input type="color">` holding an RGB triple.

use std::any::Any;
use std::borrow::Cow;

use crate::driver::Driver;
use crate::escape::print_quoted;
use crate::widget::{Property, Updated, Widget};

// ---------------------------------------------------------------------------
// ColorPicker
// ---------------------------------------------------------------------------

/// A color selector synchronized in both directions.
///
/// The wire value is the usual `#rrggbb` form; malformed client input is
/// ignored and the picker keeps its color.
///
/// # Examples
///
/// ```ignore
/// let led = ColorPicker::new("led", 255, 0, 0);
/// ```
pub struct ColorPicker {
    id: String,
    r: u8,
    g: u8,
    b: u8,
}

impl ColorPicker {
    /// Create a picker with an initial color.
    pub fn new(id: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self {
            id: id.into(),
            r,
            g,
            b,
        }
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Set the color. Returns whether it actually changed.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) -> bool {
        let changed = (r, g, b) != (self.r, self.g, self.b);
        self.r = r;
        self.g = g;
        self.b = b;
        changed
    }

    /// The `#rrggbb` form of the current color.
    fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a `#rrggbb` string into an RGB triple.
fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

impl Widget for ColorPicker {
    fn kind(&self) -> &'static str {
        "ColorPicker"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<input id=");
        print_quoted(out, &self.id);
        out.print_content(&format!(" type=\"color\" value=\"{}\"", self.hex()));
        out.print_content(" onchange=\"doRequest(this.id, this.value);\"/>");
    }

    fn value(&self, which: Property) -> Option<Cow<'_, str>> {
        match which {
            Property::Value => Some(Cow::Owned(self.hex())),
            _ => None,
        }
    }

    fn value_property(&self, which: Property) -> Option<&'static str> {
        match which {
            Property::Value => Some("value"),
            _ => None,
        }
    }

    fn update_from_arg(&mut self, driver: &mut dyn Driver, argname: &str) -> Updated {
        let raw = driver.arg(argname).unwrap_or_default();
        match parse_hex(&raw) {
            Some((r, g, b)) => {
                self.set_color(r, g, b);
                Updated::Yes
            }
            None => Updated::No,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
