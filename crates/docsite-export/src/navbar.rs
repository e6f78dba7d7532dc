//! Navbar block shared by every page.

use serde::Serialize;

/// Data for the navbar block, exposed to templates as `navbar`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Navbar {
    /// Site name shown in the navbar.
    pub site_name: String,
}

impl Navbar {
    /// Create the navbar block.
    #[must_use]
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }
}
