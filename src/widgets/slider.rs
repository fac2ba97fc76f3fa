//! Slider widget: a ranged numeric input.
//!
//! Renders as `<input type="range">`. The value is clamped to `[min, max]`
//! on every write, server- or client-side; min and max themselves travel as
//! extra properties so the client range stays in step with the server.

use std::any::Any;
use std::borrow::Cow;

use crate::driver::Driver;
use crate::escape::print_quoted;
use crate::widget::{Property, Updated, Widget};

// ---------------------------------------------------------------------------
// Slider
// ---------------------------------------------------------------------------

/// A ranged numeric input synchronized in both directions.
///
/// # Examples
///
/// ```ignore
/// let brightness = Slider::new("brightness", 0, 255, 128);
/// ```
pub struct Slider {
    id: String,
    min: i16,
    max: i16,
    value: i16,
}

impl Slider {
    /// Create a slider over `[min, max]` with an initial value.
    ///
    /// `min` must not exceed `max`; the initial value is clamped into the
    /// range.
    pub fn new(id: impl Into<String>, min: i16, max: i16, initial: i16) -> Self {
        debug_assert!(min <= max, "slider range is inverted");
        let mut slider = Self {
            id: id.into(),
            min,
            max,
            value: min,
        };
        slider.set_value(initial);
        slider
    }

    /// Return the current value.
    pub fn int_value(&self) -> i16 {
        self.value
    }

    /// The lower bound.
    pub fn min(&self) -> i16 {
        self.min
    }

    /// The upper bound.
    pub fn max(&self) -> i16 {
        self.max
    }

    /// Set the value, clamped into `[min, max]`.
    ///
    /// Returns whether the stored value actually changed.
    pub fn set_value(&mut self, value: i16) -> bool {
        let value = value.max(self.min).min(self.max);
        let changed = value != self.value;
        self.value = value;
        changed
    }
}

impl Widget for Slider {
    fn kind(&self) -> &'static str {
        "Slider"
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn render_open(&self, out: &mut dyn Driver) {
        out.print_content("<input id=");
        print_quoted(out, &self.id);
        out.print_content(&format!(
            " type=\"range\" min=\"{}\" max=\"{}\" value=\"{}\"",
            self.min, self.max, self.value
        ));
        out.print_content(" oninput=\"doRequest(this.id, this.value);\"/>");
    }

    fn value(&self, which: Property) -> Option<Cow<'_, str>> {
        match which {
            Property::Value => Some(Cow::Owned(self.value.to_string())),
            Property::Extra(0) => Some(Cow::Owned(self.min.to_string())),
            Property::Extra(1) => Some(Cow::Owned(self.max.to_string())),
            _ => None,
        }
    }

    fn value_property(&self, which: Property) -> Option<&'static str> {
        match which {
            Property::Value => Some("value"),
            Property::Extra(0) => Some("min"),
            Property::Extra(1) => Some("max"),
            _ => None,
        }
    }

    fn update_from_arg(&mut self, driver: &mut dyn Driver, argname: &str) -> Updated {
        let raw = driver.arg(argname).unwrap_or_default();
        match raw.trim().parse::<i16>() {
            Ok(value) => {
                self.set_value(value);
                Updated::Yes
            }
            // Unparseable input keeps the current value.
            Err(_) => Updated::No,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDriver;

    #[test]
    fn render_carries_range_and_value() {
        let slider = Slider::new("s1", 0, 100, 50);
        let mut driver = TestDriver::new();
        slider.render_open(&mut driver);
        let html = driver.output();
        assert!(html.contains("id=\"s1\""));
        assert!(html.contains("type=\"range\""));
        assert!(html.contains("min=\"0\" max=\"100\" value=\"50\""));
        assert!(html.contains("doRequest(this.id, this.value)"));
    }

    #[test]
    fn initial_value_is_clamped() {
        let slider = Slider::new("s", 0, 10, 200);
        assert_eq!(slider.int_value(), 10);
    }

    #[test]
    fn set_value_clamps_and_reports() {
        let mut slider = Slider::new("s", 0, 100, 50);
        assert!(slider.set_value(-20));
        assert_eq!(slider.int_value(), 0);
        assert!(!slider.set_value(-5));
    }

    #[test]
    fn value_and_extras() {
        let slider = Slider::new("s", -5, 5, 3);
        assert_eq!(slider.value(Property::Value).unwrap(), "3");
        assert_eq!(slider.value(Property::Extra(0)).unwrap(), "-5");
        assert_eq!(slider.value(Property::Extra(1)).unwrap(), "5");
        assert!(slider.value(Property::Extra(2)).is_none());
        assert_eq!(slider.value_property(Property::Value), Some("value"));
        assert_eq!(slider.value_property(Property::Extra(0)), Some("min"));
        assert_eq!(slider.value_property(Property::Extra(1)), Some("max"));
    }

    #[test]
    fn client_update_parses_and_clamps() {
        let mut slider = Slider::new("s", 0, 100, 50);
        let mut driver = TestDriver::new().with_arg("value", "70");
        assert_eq!(slider.update_from_arg(&mut driver, "value"), Updated::Yes);
        assert_eq!(slider.int_value(), 70);

        let mut driver = TestDriver::new().with_arg("value", "9000");
        slider.update_from_arg(&mut driver, "value");
        assert_eq!(slider.int_value(), 100);
    }

    #[test]
    fn malformed_client_value_is_ignored() {
        let mut slider = Slider::new("s", 0, 100, 50);
        let mut driver = TestDriver::new().with_arg("value", "not-a-number");
        assert_eq!(slider.update_from_arg(&mut driver, "value"), Updated::No);
        assert_eq!(slider.int_value(), 50);
    }
}
