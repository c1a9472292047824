use std::fmt;
use std::path::Path;

use crate::errors::SessionError;
use crate::selector::Selector;

/// The common trait a browser-automation backend must implement.
///
/// The session only needs a narrow slice of what a real webdriver offers:
/// navigation, element queries, the current location, and the two capture
/// operations used for login diagnostics. Everything element-specific lives
/// on [`WebElement`].
#[async_trait::async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Load the given URL in the browser.
    async fn navigate(&self, url: &str) -> Result<(), SessionError>;

    /// Find all elements currently matching a selector.
    ///
    /// Returns an empty list (not an error) when nothing matches; the
    /// readiness poller relies on that to distinguish "not rendered yet"
    /// from a driver fault.
    async fn find_elements(&self, selector: &Selector) -> Result<Vec<WebElement>, SessionError>;

    /// The URL the browser is currently showing.
    async fn current_url(&self) -> Result<String, SessionError>;

    /// Capture a screenshot of the current page to `path`.
    async fn screenshot(&self, path: &Path) -> Result<(), SessionError>;

    /// The raw markup of the current page.
    async fn page_source(&self) -> Result<String, SessionError>;

    /// Shut down the browser. Called exactly once per session.
    async fn close(&self) -> Result<(), SessionError>;
}

/// Represents one element of the rendered page
pub struct WebElement {
    inner: Box<dyn ElementImpl>,
}

impl WebElement {
    pub fn new(inner: Box<dyn ElementImpl>) -> Self {
        Self { inner }
    }

    /// The visible text content of the element.
    pub async fn text(&self) -> Result<String, SessionError> {
        self.inner.text().await
    }

    /// Type text into the element (input fields).
    pub async fn type_text(&self, text: &str) -> Result<(), SessionError> {
        self.inner.type_text(text).await
    }

    /// Click the element.
    pub async fn click(&self) -> Result<(), SessionError> {
        self.inner.click().await
    }
}

impl fmt::Debug for WebElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebElement").finish_non_exhaustive()
    }
}

/// The backend-specific half of [`WebElement`].
#[async_trait::async_trait]
pub trait ElementImpl: Send + Sync {
    async fn text(&self) -> Result<String, SessionError>;
    async fn type_text(&self, text: &str) -> Result<(), SessionError>;
    async fn click(&self) -> Result<(), SessionError>;
}
