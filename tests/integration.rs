//! Integration tests for weft.
//!
//! These tests exercise the public API from outside the crate: whole render
//! and sync exchanges through the testing pilot, widget round-trips, and the
//! revision-clock properties the update protocol depends on.

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use weft::dom::Tree;
use weft::escape::filtered;
use weft::page::{Page, PageConfig};
use weft::testing::{Pilot, TestDriver};
use weft::widgets::*;

fn demo_page() -> Page {
    let mut page = Page::new(PageConfig::new().with_title("Demo"));
    let root = page.root();
    page.insert(root, StaticHtml::new("<h1>Hi</h1>"));
    page.insert(root, Slider::new("s1", 0, 100, 50));
    page
}

// ---------------------------------------------------------------------------
// The three-poll slider scenario
// ---------------------------------------------------------------------------

#[test]
fn initial_poll_carries_slider_state_but_not_statics() {
    let mut pilot = Pilot::new(demo_page());
    let body = pilot.poll(0);
    assert!(body.contains("\"id\": \"s1\""));
    assert!(body.contains("[\"value\", \"50\"]"));
    assert!(!body.contains("Hi"));
}

#[test]
fn server_change_then_poll_then_quiet_poll() {
    let mut pilot = Pilot::new(demo_page());

    let s1 = pilot.page().tree.find_by_id("s1").unwrap();
    pilot.page_mut().tree.mutate::<Slider>(s1, |s| s.set_value(70));

    let body = pilot.poll(1).to_owned();
    assert!(body.starts_with("{\"revision\": 2,"));
    assert!(body.contains("[\"value\", \"70\"]"));
    assert_eq!(pilot.page().tree.clock().committed(), 2);

    let body = pilot.poll(2);
    assert_eq!(body, "{\"revision\": 2,\n\"updates\": [\n\n]}\n");
}

#[test]
fn lost_response_self_heals_on_next_poll() {
    let mut pilot = Pilot::new(demo_page());
    let s1 = pilot.page().tree.find_by_id("s1").unwrap();
    pilot.page_mut().tree.mutate::<Slider>(s1, |s| s.set_value(70));
    // The client never saw revision 2's response; it polls again with its
    // old revision and simply receives a wider diff.
    pilot.poll(1);
    let body = pilot.poll(1);
    assert!(body.contains("[\"value\", \"70\"]"));
}

// ---------------------------------------------------------------------------
// Diff exactness and idempotence
// ---------------------------------------------------------------------------

#[test]
fn diff_contains_exactly_the_changed_elements() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    page.insert(root, Slider::new("a", 0, 10, 1));
    page.insert(root, Slider::new("b", 0, 10, 2));
    page.insert(root, TextSpan::new("c", "x"));
    let mut pilot = Pilot::new(page);
    pilot.poll(0);

    let a = pilot.page().tree.find_by_id("a").unwrap();
    let b = pilot.page().tree.find_by_id("b").unwrap();
    pilot.page_mut().tree.mutate::<Slider>(a, |s| s.set_value(5));
    // A no-op mutation must not produce a record.
    pilot.page_mut().tree.mutate::<Slider>(b, |s| s.set_value(2));

    let body = pilot.poll(1);
    assert!(body.contains("\"id\": \"a\""));
    assert!(!body.contains("\"id\": \"b\""));
    assert!(!body.contains("\"id\": \"c\""));
}

#[test]
fn two_mutations_in_one_cycle_share_one_revision_bump() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    let a = page.insert(root, Slider::new("a", 0, 10, 1));
    let b = page.insert(root, TextSpan::new("b", "x"));

    page.tree.mutate::<Slider>(a, |s| s.set_value(5));
    page.tree.mutate::<TextSpan>(b, |s| s.set_text("y"));
    assert_eq!(
        page.tree.entry(a).unwrap().revision(),
        page.tree.entry(b).unwrap().revision()
    );

    let mut pilot = Pilot::new(page);
    let body = pilot.poll(1).to_owned();
    assert!(body.starts_with("{\"revision\": 2,"));
    assert!(body.contains("\"id\": \"a\""));
    assert!(body.contains("\"id\": \"b\""));
    assert_eq!(pilot.poll(2), "{\"revision\": 2,\n\"updates\": [\n\n]}\n");
}

#[test]
fn repeated_poll_with_same_revision_is_identical() {
    let mut pilot = Pilot::new(demo_page());
    let s1 = pilot.page().tree.find_by_id("s1").unwrap();
    pilot.page_mut().tree.mutate::<Slider>(s1, |s| s.set_value(70));
    let first = pilot.poll(1).to_owned();
    let second = pilot.poll(1).to_owned();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Client round-trips
// ---------------------------------------------------------------------------

#[test]
fn text_input_round_trip_clamps_to_capacity() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    page.insert(root, TextInput::new("name", 4));
    let mut pilot = Pilot::new(page);

    let body = pilot.submit(1, "name", "overlong").to_owned();
    let key = pilot.page().tree.find_by_id("name").unwrap();
    assert_eq!(pilot.page().tree.widget::<TextInput>(key).unwrap().text(), "over");
    assert!(body.contains("[\"value\", \"over\"]"));
}

#[test]
fn color_picker_round_trip() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    page.insert(root, ColorPicker::new("led", 0, 0, 0));
    let mut pilot = Pilot::new(page);

    let body = pilot.submit(1, "led", "#ff8800").to_owned();
    assert!(body.contains("[\"value\", \"#ff8800\"]"));
    let key = pilot.page().tree.find_by_id("led").unwrap();
    let picker = pilot.page().tree.widget::<ColorPicker>(key).unwrap();
    assert_eq!((picker.red(), picker.green(), picker.blue()), (255, 136, 0));
}

#[test]
fn option_select_round_trip() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    page.insert(root, OptionSelect::new("speed", ["low", "mid", "high"], 0));
    let mut pilot = Pilot::new(page);

    let body = pilot.submit(1, "speed", "2").to_owned();
    assert!(body.contains("[\"selectedIndex\", \"2\"]"));
    let key = pilot.page().tree.find_by_id("speed").unwrap();
    assert_eq!(
        pilot.page().tree.widget::<OptionSelect>(key).unwrap().selected_option(),
        Some(2)
    );
}

#[test]
fn push_button_click_reaches_callback() {
    let clicks = Rc::new(Cell::new(0));
    let seen = Rc::clone(&clicks);

    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    page.insert(
        root,
        PushButton::new("go", "Go").on_click(move || seen.set(seen.get() + 1)),
    );
    let mut pilot = Pilot::new(page);

    pilot.submit(1, "go", "t");
    assert_eq!(clicks.get(), 1);
}

// ---------------------------------------------------------------------------
// Radio group scenario
// ---------------------------------------------------------------------------

#[test]
fn client_radio_flip_clears_previous_option_in_same_diff() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    let mode = page.insert(root, RadioGroup::new("mode", ["A", "B"], 0));
    assert_eq!(page.tree.selected_option(mode), Some(0));
    let mut pilot = Pilot::new(page);

    let body = pilot.submit(1, "mode1", "t").to_owned();
    assert_eq!(pilot.page().tree.selected_option(mode), Some(1));
    assert!(body.contains("\"id\": \"mode1\""));
    assert!(body.contains("\"id\": \"mode0\""));
    let mode1_record = body.find("\"id\": \"mode1\"").unwrap();
    let mode0_record = body.find("\"id\": \"mode0\"").unwrap();
    // Records are tree-ordered, and both carry their checked state.
    assert!(mode0_record < mode1_record);
    assert_eq!(body.matches("[\"checked\", \"true\"]").count(), 1);
    assert_eq!(body.matches("[\"checked\", \"false\"]").count(), 1);
}

#[test]
fn radio_invariant_holds_across_mixed_operations() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    let mode = page.insert(root, RadioGroup::new("mode", ["A", "B", "C"], 2));
    let mut pilot = Pilot::new(page);

    pilot.submit(1, "mode0", "t");
    pilot.page_mut().tree.select_option(mode, 1);
    pilot.submit(2, "mode2", "t");
    pilot.page_mut().tree.select_option(mode, 9); // clear

    let tree = &pilot.page().tree;
    let checked = tree
        .children(mode)
        .iter()
        .filter(|&&key| tree.widget::<CheckButton>(key).unwrap().is_checked())
        .count();
    assert_eq!(checked, 0);
    assert_eq!(tree.selected_option(mode), None);
}

// ---------------------------------------------------------------------------
// Hideable group composition
// ---------------------------------------------------------------------------

#[test]
fn hiding_a_hideable_group_touches_only_its_own_record() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    let panel = page.insert(root, HideableGroup::new("panel"));
    page.insert(panel, Slider::new("inner", 0, 10, 3));
    let mut pilot = Pilot::new(page);
    pilot.poll(0);

    pilot.page_mut().tree.set_visible(panel, false);
    let body = pilot.poll(1).to_owned();
    assert!(body.contains("\"id\": \"panel\""));
    assert!(body.contains("[\"style.display\", \"none\"]"));
    assert!(!body.contains("\"id\": \"inner\""));

    // The child keeps its own visibility state.
    let tree = &pilot.page().tree;
    let inner = tree.find_by_id("inner").unwrap();
    assert!(tree
        .entry(inner)
        .unwrap()
        .flags()
        .contains(weft::dom::NodeFlags::VISIBLE));
}

#[test]
fn hideable_group_renders_wrapper_div() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    let panel = page.insert(root, HideableGroup::new("panel"));
    page.insert(panel, StaticHtml::new("<p>inside</p>"));
    let mut pilot = Pilot::new(page);
    let html = pilot.render();
    assert!(html.contains("<div id=\"panel\"><p>inside</p></div>"));
}

// ---------------------------------------------------------------------------
// Full document
// ---------------------------------------------------------------------------

#[test]
fn rendered_document_embeds_poll_script_and_widgets() {
    let mut page = Page::new(
        PageConfig::new()
            .with_title("Device")
            .with_poll_interval_ms(500),
    );
    let root = page.root();
    page.insert(root, ConnectionIndicator::new());
    page.insert(root, Slider::new("s1", 0, 100, 50));
    let mut pilot = Pilot::new(page);

    let html = pilot.render();
    assert!(html.contains("<title>Device</title>"));
    assert!(html.contains("function doRequest(id, value)"));
    assert!(html.contains("}, 500);"));
    assert!(html.contains("class=\"connstate\""));
    assert!(html.contains("getElementsByClassName('connstate')"));
    assert!(html.contains("id=\"s1\""));
}

#[test]
fn duplicate_ids_are_caught_by_validation() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    page.insert(root, Slider::new("dup", 0, 10, 0));
    page.insert(root, TextSpan::new("dup", "x"));
    assert!(page.tree.validate_ids().is_err());

    let page = demo_page();
    assert!(page.tree.validate_ids().is_ok());
}

// ---------------------------------------------------------------------------
// Change callback
// ---------------------------------------------------------------------------

#[test]
fn callback_reaction_rides_the_triggering_response() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    page.insert(root, Slider::new("s1", 0, 100, 50));
    page.insert(root, TextSpan::new("echo", ""));
    let mut pilot = Pilot::new(page);

    let mut react = |tree: &mut Tree| {
        let value = {
            let key = tree.find_by_id("s1").unwrap();
            tree.widget::<Slider>(key).unwrap().int_value()
        };
        let echo = tree.find_by_id("echo").unwrap();
        tree.mutate::<TextSpan>(echo, |span| span.set_text(format!("at {value}")));
    };
    let body = pilot.submit_with(1, "s1", "33", &mut react).to_owned();
    assert!(body.contains("[\"innerHTML\", \"at 33\"]"));
    // Committed in the same exchange: a follow-up poll is quiet.
    assert!(!pilot.poll(2).contains("\"id\""));
}

// ---------------------------------------------------------------------------
// Escaping at the boundaries
// ---------------------------------------------------------------------------

#[test]
fn filter_combines_quoting_and_html_escaping() {
    insta::assert_snapshot!(
        filtered("say \"hi\" & <run>", true, true),
        @r#""say \"hi\" &amp; &lt;run>""#
    );
}

#[test]
fn untrusted_span_content_stays_inert_end_to_end() {
    let mut page = Page::new(PageConfig::new());
    let root = page.root();
    let note = page.insert(root, TextSpan::new("note", ""));
    page.tree
        .mutate::<TextSpan>(note, |s| s.set_text("<script>alert(1)</script>"));
    let mut pilot = Pilot::new(page);

    let html = pilot.render().to_owned();
    assert!(html.contains("&lt;script>alert(1)&lt;/script>"));
    let body = pilot.poll(0);
    assert!(body.contains("&lt;script>"));
    assert!(!body.contains("\"<script>"));
}

#[test]
fn sync_output_is_wellformed_without_a_driver_transport() {
    // Drive handle_request directly against a raw TestDriver, the way a
    // custom transport integration would.
    let mut page = demo_page();
    let mut driver = TestDriver::new().with_arg("revision", "0");
    page.handle_request(&mut driver, None);
    let body = driver.output();
    assert!(body.starts_with("{\"revision\": "));
    assert!(body.ends_with("\n]}\n"));
}
