//! Scripted browser and sink fixtures for session tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::driver::{BrowserDriver, ElementImpl, WebElement};
use crate::errors::SessionError;
use crate::records::MeasurementRecord;
use crate::selector::Selector;
use crate::storage::RecordSink;

/// Scripted contents of one dashboard page.
#[derive(Debug, Default, Clone)]
pub struct FakePage {
    /// Number of `input` elements once the login form has rendered.
    pub inputs: usize,
    /// Number of `button` elements once the login form has rendered.
    pub buttons: usize,
    /// Title card texts once the page has rendered.
    pub title_cards: Vec<String>,
    /// Number of facility detail containers once rendered.
    pub containers: usize,
    /// How many polls the page swallows before it counts as rendered.
    /// 0 means the very first poll already sees the content.
    pub renders_after: usize,
    /// Label texts, in page order.
    pub keys: Vec<String>,
    /// Raw value texts under the correctly spelled class attribute.
    pub values: Vec<String>,
    /// Raw value texts under the misspelled `calss` attribute.
    pub values_misspelled: Vec<String>,
}

#[derive(Debug, Default)]
pub struct BrowserState {
    pub current_url: String,
    pub pages: HashMap<String, FakePage>,
    /// URL the browser lands on once the login button is clicked.
    pub url_after_login: Option<String>,
    pub page_source: String,
    /// Every URL passed to `navigate`, in order.
    pub visits: Vec<String>,
    /// Every text typed into an input, in order.
    pub typed: Vec<String>,
    pub clicks: usize,
    pub screenshots: Vec<PathBuf>,
    pub closed: bool,
    /// Readiness polls seen so far, per URL.
    polls: HashMap<String, usize>,
}

/// A [`BrowserDriver`] whose rendered state is scripted per URL, including
/// how many polls a page takes to "render".
#[derive(Clone, Default)]
pub struct FakeBrowser {
    pub state: Arc<Mutex<BrowserState>>,
}

#[derive(Debug, Clone, Copy)]
enum FakeKind {
    Static,
    Input,
    LoginButton,
}

struct FakeElement {
    text: String,
    kind: FakeKind,
    state: Arc<Mutex<BrowserState>>,
}

#[async_trait::async_trait]
impl ElementImpl for FakeElement {
    async fn text(&self) -> Result<String, SessionError> {
        Ok(self.text.clone())
    }

    async fn type_text(&self, text: &str) -> Result<(), SessionError> {
        self.state.lock().unwrap().typed.push(text.to_string());
        Ok(())
    }

    async fn click(&self) -> Result<(), SessionError> {
        let mut st = self.state.lock().unwrap();
        st.clicks += 1;
        if matches!(self.kind, FakeKind::LoginButton) {
            if let Some(url) = st.url_after_login.clone() {
                st.current_url = url;
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserDriver for FakeBrowser {
    async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        let mut st = self.state.lock().unwrap();
        st.current_url = url.to_string();
        st.visits.push(url.to_string());
        Ok(())
    }

    async fn find_elements(&self, selector: &Selector) -> Result<Vec<WebElement>, SessionError> {
        let mut st = self.state.lock().unwrap();
        let url = st.current_url.clone();
        let page = st.pages.get(&url).cloned().unwrap_or_default();

        let make = |texts: Vec<String>, kind: FakeKind| -> Vec<WebElement> {
            texts
                .into_iter()
                .map(|text| {
                    WebElement::new(Box::new(FakeElement {
                        text,
                        kind,
                        state: self.state.clone(),
                    }))
                })
                .collect()
        };

        let elements = match selector {
            Selector::Tag(tag) => match tag.as_str() {
                // Tag queries count as readiness polls; one poll per
                // wait attempt (the login wait's button query piggybacks
                // on the input query of the same attempt).
                "input" => {
                    let polls = st.polls.entry(url.clone()).or_insert(0);
                    *polls += 1;
                    if *polls > page.renders_after {
                        make(vec![String::new(); page.inputs], FakeKind::Input)
                    } else {
                        Vec::new()
                    }
                }
                "button" => {
                    let polls = st.polls.get(&url).copied().unwrap_or(0);
                    if polls > page.renders_after {
                        make(vec![String::new(); page.buttons], FakeKind::LoginButton)
                    } else {
                        Vec::new()
                    }
                }
                "mat-card-title" => {
                    let polls = st.polls.entry(url.clone()).or_insert(0);
                    *polls += 1;
                    if *polls > page.renders_after {
                        make(page.title_cards.clone(), FakeKind::Static)
                    } else {
                        Vec::new()
                    }
                }
                "froeling-facility-detail-container" => {
                    let polls = st.polls.entry(url.clone()).or_insert(0);
                    *polls += 1;
                    if *polls > page.renders_after {
                        make(vec![String::new(); page.containers], FakeKind::Static)
                    } else {
                        Vec::new()
                    }
                }
                _ => Vec::new(),
            },
            Selector::XPath(path) => match path.as_str() {
                "//div[@class='key']" => make(page.keys.clone(), FakeKind::Static),
                "//div[@class='value']" => make(page.values.clone(), FakeKind::Static),
                "//div[@calss='value']" => make(page.values_misspelled.clone(), FakeKind::Static),
                _ => Vec::new(),
            },
        };
        Ok(elements)
    }

    async fn current_url(&self) -> Result<String, SessionError> {
        Ok(self.state.lock().unwrap().current_url.clone())
    }

    async fn screenshot(&self, path: &Path) -> Result<(), SessionError> {
        std::fs::write(path, b"\x89PNG not really")?;
        self.state.lock().unwrap().screenshots.push(path.to_path_buf());
        Ok(())
    }

    async fn page_source(&self) -> Result<String, SessionError> {
        Ok(self.state.lock().unwrap().page_source.clone())
    }

    async fn close(&self) -> Result<(), SessionError> {
        self.state.lock().unwrap().closed = true;
        Ok(())
    }
}

/// A [`RecordSink`] that stores records in memory, optionally failing once a
/// given number of records has been accepted.
#[derive(Clone, Default)]
pub struct FakeSink {
    pub records: Arc<Mutex<Vec<MeasurementRecord>>>,
    pub fail_after: Option<usize>,
}

#[async_trait::async_trait]
impl RecordSink for FakeSink {
    async fn append_record(&self, record: &MeasurementRecord) -> Result<(), SessionError> {
        let mut records = self.records.lock().unwrap();
        if let Some(limit) = self.fail_after {
            if records.len() >= limit {
                return Err(SessionError::Storage("disk full".to_string()));
            }
        }
        records.push(record.clone());
        Ok(())
    }
}
