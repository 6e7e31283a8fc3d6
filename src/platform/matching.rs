//! Window-candidate matching
//!
//! The per-window decision made during enumeration, kept free of Win32
//! types. Candidates are offered in enumeration order; the first visible
//! window owned by a matching executable (and, when a title filter is set,
//! a matching title) is recorded, every later candidate is ignored.

pub struct WindowSearch<H> {
    exe_upper: String,
    title_contains: String,
    found: Option<H>,
}

impl<H: Copy> WindowSearch<H> {
    pub fn new(exe_name: &str, title_contains: &str) -> Self {
        Self {
            exe_upper: exe_name.to_uppercase(),
            title_contains: title_contains.to_string(),
            found: None,
        }
    }

    /// Whether a match has been recorded; further offers are ignored.
    pub fn done(&self) -> bool {
        self.found.is_some()
    }

    /// Whether offers need the window title at all, so callers can skip
    /// fetching it.
    pub fn wants_title(&self) -> bool {
        !self.title_contains.is_empty()
    }

    /// Offers one candidate in enumeration order.
    ///
    /// `exe_base` is the owning process's uppercase executable base name,
    /// `None` when it could not be resolved. Executable comparison is
    /// case-insensitive (both sides uppercased), title containment is
    /// case-sensitive.
    pub fn offer(&mut self, handle: H, visible: bool, exe_base: Option<&str>, title: &str) {
        if self.found.is_some() || !visible {
            return;
        }
        if exe_base != Some(self.exe_upper.as_str()) {
            return;
        }
        if !self.title_contains.is_empty() && !title.contains(&self.title_contains) {
            return;
        }
        self.found = Some(handle);
    }

    pub fn into_found(self) -> Option<H> {
        self.found
    }
}
