//! Page: full-document rendering and the sync request entry point.
//!
//! A [`Page`] ties a widget [`Tree`] to its document shell — title, extra
//! header markup, and the embedded client script that polls the same URL
//! with the last-seen revision and applies returned property assignments by
//! element id. Serve [`render`](Page::render) on GET and
//! [`handle_request`](Page::handle_request) on POST of the same URL.

use crate::dom::{NodeKey, Tree};
use crate::driver::Driver;
use crate::escape::print_filtered;
use crate::sync::{self, UpdateWriter};
use crate::widget::Widget;

/// Leading part of the embedded client script, up to the poll interval.
///
/// The script keeps the last-seen revision, posts
/// `revision=<seen>&id=<element>&value=<urlencoded>` to the page URL, applies
/// returned `["property", "value"]` pairs by element id (coercing the literal
/// strings "true"/"false" to booleans and walking dotted property paths), and
/// counts unanswered requests to drive connection indicators.
const POLL_SCRIPT_HEAD: &str = "<script>
var serverrevision = 0;
var unanswered = 0;
function applyChange(el, prop, value) {
    if (!el) return;
    if (value === 'true') value = true; else if (value === 'false') value = false;
    var path = prop.split('.');
    var target = el;
    for (var i = 0; i < path.length - 1; ++i) target = target[path[i]];
    target[path[path.length - 1]] = value;
}
function setConnState(ok) {
    var els = document.getElementsByClassName('connstate');
    for (var i = 0; i < els.length; ++i) {
        els[i].children[0].style.display = ok ? 'initial' : 'none';
        els[i].children[1].style.display = ok ? 'none' : 'initial';
    }
}
function doRequest(id, value) {
    id = (id === undefined) ? '' : id;
    value = (value === undefined) ? '' : value;
    var req = new XMLHttpRequest();
    req.onload = function() {
        unanswered = 0;
        setConnState(true);
        var response = JSON.parse(req.responseText);
        serverrevision = response.revision;
        for (var i = 0; i < response.updates.length; ++i) {
            var update = response.updates[i];
            var el = document.getElementById(update.id);
            for (var j = 0; j < update.changes.length; ++j) {
                applyChange(el, update.changes[j][0], update.changes[j][1]);
            }
        }
    };
    req.open('POST', document.URL, true);
    req.setRequestHeader('Content-Type', 'application/x-www-form-urlencoded');
    if (++unanswered > 5) setConnState(false);
    req.send('revision=' + serverrevision + '&id=' + id + '&value=' + encodeURIComponent(value));
}
window.setInterval(function() { doRequest(); }, ";

/// Trailing part of the embedded client script, after the poll interval.
const POLL_SCRIPT_TAIL: &str = ");
</script>
";

// ---------------------------------------------------------------------------
// PageConfig
// ---------------------------------------------------------------------------

/// Configuration for a page's document shell.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// HTML document title.
    pub title: String,
    /// Literal markup appended to the `<head>` section, e.g. CSS.
    pub header_extra: Option<String>,
    /// Client poll interval in milliseconds.
    pub poll_interval_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            header_extra: None,
            poll_interval_ms: 1000,
        }
    }
}

impl PageConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set extra header markup (builder).
    pub fn with_header_extra(mut self, extra: impl Into<String>) -> Self {
        self.header_extra = Some(extra.into());
        self
    }

    /// Set the client poll interval in milliseconds (builder).
    pub fn with_poll_interval_ms(mut self, interval: u32) -> Self {
        self.poll_interval_ms = interval;
        self
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// The main interface: a widget tree plus its document shell.
///
/// One instance lives for the process lifetime. All work is synchronous and
/// request-driven; nothing here suspends or spawns.
pub struct Page {
    /// The widget tree, including the revision clock.
    pub tree: Tree,
    config: PageConfig,
}

impl Page {
    /// Create an empty page with the given config.
    pub fn new(config: PageConfig) -> Self {
        Self {
            tree: Tree::new(),
            config,
        }
    }

    /// The tree's root node.
    pub fn root(&self) -> NodeKey {
        self.tree.root()
    }

    /// Insert a widget as the last child of `parent`. Convenience delegate
    /// to [`Tree::insert`].
    pub fn insert(&mut self, parent: NodeKey, widget: impl Widget + 'static) -> NodeKey {
        self.tree.insert(parent, widget)
    }

    /// The page configuration.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Serve the full page: headers, document shell with title, extra header
    /// markup and the poll script, then every child in order. Arrange for
    /// this to run on GET requests to the page URL.
    pub fn render(&self, driver: &mut dyn Driver) {
        tracing::debug!(title = %self.config.title, "rendering full page");
        driver.print_header(true);
        driver.print_content("<!DOCTYPE html>\n<html><head>\n<title>");
        print_filtered(driver, &self.config.title, false, true);
        driver.print_content("</title>\n");
        if let Some(extra) = &self.config.header_extra {
            driver.print_content(extra);
            driver.print_content("\n");
        }
        driver.print_content(POLL_SCRIPT_HEAD);
        driver.print_content(&self.config.poll_interval_ms.to_string());
        driver.print_content(POLL_SCRIPT_TAIL);
        driver.print_content("</head>\n<body>\n");
        self.tree.render_node(self.tree.root(), driver);
        driver.print_content("\n</body></html>\n");
    }

    /// Run one sync exchange. Arrange for this to run on POST requests to
    /// the page URL.
    ///
    /// In order: the client's last-seen revision and submitted `id`/`value`
    /// pair are read from the driver; a matching element pulls the new value
    /// (radio coordination included); `change_callback` runs once if a
    /// client change was applied — server-side reactions it makes ride in
    /// this same response; the update batch is serialized; the revision
    /// clock commits last.
    ///
    /// A malformed or missing revision argument degrades to 0, which simply
    /// resends every element's state.
    pub fn handle_request(
        &mut self,
        driver: &mut dyn Driver,
        mut change_callback: Option<&mut dyn FnMut(&mut Tree)>,
    ) {
        let since = driver
            .arg("revision")
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .unwrap_or(0);

        let mut applied = false;
        if let Some(id) = driver.arg("id").filter(|id| !id.is_empty()) {
            match self.tree.find_by_id(&id) {
                Some(key) => {
                    applied = self.tree.apply_client_arg(key, driver, "value");
                }
                None => {
                    tracing::debug!(id = %id, "client argument for unknown element");
                }
            }
        }
        if applied {
            if let Some(callback) = change_callback.as_mut() {
                callback(&mut self.tree);
            }
        }

        let revision = self.tree.clock().pending();
        tracing::debug!(since, applied, revision, "sync exchange");

        driver.print_header(false);
        driver.print_content("{\"revision\": ");
        driver.print_content(&revision.to_string());
        driver.print_content(",\n\"updates\": [\n");
        let mut writer = UpdateWriter::new();
        sync::send_updates(&self.tree, self.tree.root(), since, &mut writer, driver);
        driver.print_content("\n]}\n");

        self.tree.commit();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
