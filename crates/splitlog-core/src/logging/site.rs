//! Call-site metadata for log entries
//!
//! File and line come from `#[track_caller]` propagation, so every internal
//! wrapper between the user's call and the backend must carry the attribute.
//! The enclosing function name is looked up at runtime by matching that
//! file and line against the symbolized stack; the
//! [`call_site!`](crate::call_site) macro captures it at compile time instead.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::panic::Location;

/// Where a log call was made
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallSite {
    file: &'static str,
    function: Cow<'static, str>,
    line: u32,
}

impl CallSite {
    /// Build a call site, reducing `file` to its base name
    pub fn new(file: &'static str, function: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: base_name(file),
            function: function.into(),
            line,
        }
    }

    /// Blank site used when nothing could be resolved
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Resolve the nearest caller not marked `#[track_caller]`
    ///
    /// The function name stays blank when the stack cannot be symbolized,
    /// for instance in a binary built without debug info.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        let site = Self::from_location(location);
        match enclosing_function(site.file, site.line) {
            Some(function) => site.with_function(function),
            None => site,
        }
    }

    /// File and line only, without a stack walk
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), "", location.line())
    }

    /// Attach a function name to an already resolved site
    pub fn with_function(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        self.function = function.into();
        self
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Strip directories from a source path (either separator)
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Reduce a fully qualified item path to the bare function name
///
/// Expects the type name of a marker item declared inside the function
/// (`crate::module::Type::method::__marker`); the marker segment, any closure
/// markers and all enclosing path segments are dropped.
pub fn function_name(qualified: &'static str) -> &'static str {
    match qualified.rsplit_once("::") {
        Some((head, _marker)) => unqualified(head),
        None => qualified,
    }
}

/// Drop the symbol hash, closure markers and enclosing path segments
///
/// `app::<impl app::Sink for app::Net>::send::{{closure}}::h0123456789abcdef` → `send`
pub fn unqualified(symbol: &str) -> &str {
    let mut path = symbol;
    if let Some((head, hash)) = path.rsplit_once("::") {
        if is_symbol_hash(hash) {
            path = head;
        }
    }
    while let Some(head) = path.strip_suffix("::{{closure}}") {
        path = head;
    }
    path.rsplit("::").next().unwrap_or(path)
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Find the frame executing `file:line` and return its unqualified function name
fn enclosing_function(file: &str, line: u32) -> Option<String> {
    let mut found = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(line) {
                return;
            }
            let same_file = symbol
                .filename()
                .and_then(|path| path.file_name())
                .map_or(false, |name| name == OsStr::new(file));
            if !same_file {
                return;
            }
            if let Some(name) = symbol.name() {
                let name = format!("{:#}", name);
                found = Some(unqualified(&name).to_string());
            }
        });
        found.is_none()
    });
    found.filter(|name| !name.is_empty())
}

/// Capture the [`CallSite`] of the macro invocation, including the
/// enclosing function name
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __splitlog_marker() {}
        fn __splitlog_type_name<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::logging::CallSite::new(
            file!(),
            $crate::logging::site::function_name(__splitlog_type_name(__splitlog_marker)),
            line!(),
        )
    }};
}
