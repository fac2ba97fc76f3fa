//! Transport abstraction: the `Driver` trait.
//!
//! The core never talks to a socket or web server directly. Rendering and
//! sync exchanges go through a [`Driver`], which a transport implementation
//! wraps around its own header/body writing and argument retrieval. The
//! bundled [`TestDriver`](crate::testing::TestDriver) is one such
//! implementation; real deployments supply their own around whatever HTTP
//! server the device runs.

/// Transport interface consumed by the core.
///
/// Implementations are expected to be synchronous and blocking; the core is
/// single-threaded and request-driven, so a driver is only ever used from
/// inside one render or sync exchange at a time.
pub trait Driver {
    /// Emit the response header. `html` selects the content type: `true` for
    /// a full page render, `false` for a JSON sync response.
    fn print_header(&mut self, html: bool);

    /// Emit a chunk of response content.
    fn print_content(&mut self, content: &str);

    /// Retrieve a client-submitted argument by name, or `None` if the
    /// request carried no such argument.
    fn arg(&mut self, name: &str) -> Option<String>;
}
