//! The login-to-logout session state machine.

use std::fmt;
use std::time::Duration;

use chrono::Local;
use tracing::{debug, error, info, instrument, warn};

use crate::config::SessionConfig;
use crate::driver::BrowserDriver;
use crate::errors::SessionError;
use crate::extract::extract_value_pairs;
use crate::page::PageId;
use crate::records::MeasurementRecord;
use crate::selector::Selector;
use crate::storage::{forward_records, RecordSink};
use crate::wait::{wait_until, DEFAULT_MAX_ATTEMPTS, POLL_INTERVAL};

/// Timestamp format stamped on every record and log line of a session.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The login page renders nothing useful for the first few seconds; polling
/// earlier only burns attempts.
const LOGIN_SETTLE_DELAY: Duration = Duration::from_secs(4);

/// One ordered step of a session. Phases run strictly in declaration order
/// and at most once each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Login,
    SystemInfo,
    Boiler,
    Heating,
    Tank,
    Feed,
    Logout,
}

impl Phase {
    fn for_page(page: PageId) -> Phase {
        match page {
            PageId::System => Phase::SystemInfo,
            PageId::Boiler => Phase::Boiler,
            PageId::Heating => Phase::Heating,
            PageId::Tank => Phase::Tank,
            PageId::Feed => Phase::Feed,
        }
    }

    /// Label used in session log lines.
    fn label(&self) -> &'static str {
        match self {
            Phase::Login => "login",
            Phase::SystemInfo => "system info",
            Phase::Boiler => "boiler info",
            Phase::Heating => "heating circuit info",
            Phase::Tank => "DHW tank info",
            Phase::Feed => "feed system info",
            Phase::Logout => "logout",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one login-to-logout attempt.
///
/// `success` is true only when every phase, including the final forwarding of
/// records to storage, completed. On failure `records` is empty: partially
/// gathered records are discarded, never persisted.
#[derive(Debug)]
pub struct SessionResult {
    pub success: bool,
    pub records: Vec<MeasurementRecord>,
}

/// Drives one authenticated scrape of the dashboard: login, the five
/// information pages in fixed order, then logout and persistence.
///
/// Single-use: [`Session::run`] consumes the session. A failed session is
/// retried, if desired, by constructing a new one.
pub struct Session {
    driver: Box<dyn BrowserDriver>,
    sink: Box<dyn RecordSink>,
    config: SessionConfig,
    /// Session start time; stamped on every record.
    timestamp: String,
    phase: Phase,
    records: Vec<MeasurementRecord>,
    browser_open: bool,
}

impl Session {
    pub fn new(
        driver: Box<dyn BrowserDriver>,
        sink: Box<dyn RecordSink>,
        config: SessionConfig,
    ) -> Self {
        Self {
            driver,
            sink,
            config,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            phase: Phase::Login,
            records: Vec::new(),
            browser_open: true,
        }
    }

    /// Runs the whole phase sequence and reports the outcome.
    ///
    /// This is the single boundary where phase failures are caught: callers
    /// only ever observe the `success` flag, never a raised error. The
    /// browser is shut down on every exit path.
    #[instrument(skip_all)]
    pub async fn run(mut self, login_url: &str, username: &str, password: &str) -> SessionResult {
        match self.run_phases(login_url, username, password).await {
            Ok(()) => {
                info!(
                    "{} >>> session complete, {} records persisted",
                    self.timestamp,
                    self.records.len()
                );
                SessionResult {
                    success: true,
                    records: self.records,
                }
            }
            Err(err) => {
                error!("{} >>> session failed in {} phase: {err}", self.timestamp, self.phase);
                if let Err(close_err) = self.close_browser().await {
                    warn!("browser shutdown after failure also failed: {close_err}");
                }
                SessionResult {
                    success: false,
                    records: Vec::new(),
                }
            }
        }
    }

    async fn run_phases(
        &mut self,
        login_url: &str,
        username: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        self.login(login_url, username, password).await?;
        for page in PageId::ALL {
            self.fetch_page(page).await?;
        }
        self.logout().await
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = %self.phase, to = %phase, "phase transition");
        self.phase = phase;
    }

    async fn login(
        &mut self,
        login_url: &str,
        username: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        info!("{} >>> logging in to {login_url}", self.timestamp);
        self.driver.navigate(login_url).await?;
        tokio::time::sleep(LOGIN_SETTLE_DELAY).await;

        let input_sel = Selector::Tag("input".to_string());
        let button_sel = Selector::Tag("button".to_string());
        let form_ready = {
            let driver = self.driver.as_ref();
            let input_sel = &input_sel;
            let button_sel = &button_sel;
            wait_until(
                "login",
                DEFAULT_MAX_ATTEMPTS,
                POLL_INTERVAL,
                move || async move {
                    let inputs = driver.find_elements(input_sel).await?;
                    let buttons = driver.find_elements(button_sel).await?;
                    Ok(inputs.len() >= 2 && !buttons.is_empty())
                },
            )
            .await
        };
        if let Err(err) = form_ready {
            if err.is_timeout() {
                self.capture_login_diagnostics().await;
            }
            return Err(err);
        }

        let inputs = self.driver.find_elements(&input_sel).await?;
        let buttons = self.driver.find_elements(&button_sel).await?;
        if inputs.len() < 2 || buttons.is_empty() {
            return Err(SessionError::Driver(
                "login form disappeared between polls".to_string(),
            ));
        }
        inputs[0].type_text(username).await?;
        inputs[1].type_text(password).await?;
        buttons[0].click().await?;

        let driver = self.driver.as_ref();
        let expected = self.config.facility_url.as_str();
        wait_until(
            "first page",
            DEFAULT_MAX_ATTEMPTS,
            POLL_INTERVAL,
            move || async move { Ok(driver.current_url().await? == expected) },
        )
        .await?;
        info!("{} >>> successful login", self.timestamp);
        Ok(())
    }

    /// Writes forensic artifacts for a login that never rendered its form:
    /// a screenshot and the raw page markup, named after the session
    /// timestamp. Best-effort; the timeout itself is what fails the session.
    async fn capture_login_diagnostics(&self) {
        let stamp = self.timestamp.replace(' ', "T");
        let shot = self
            .config
            .diagnostics_dir
            .join(format!("save{stamp}screenshot.png"));
        let markup = self
            .config
            .diagnostics_dir
            .join(format!("save{stamp}webpage.html"));
        if let Err(err) = self.driver.screenshot(&shot).await {
            warn!("could not capture login screenshot: {err}");
        }
        match self.driver.page_source().await {
            Ok(source) => {
                if let Err(err) = std::fs::write(&markup, source) {
                    warn!("could not write login page markup: {err}");
                }
            }
            Err(err) => warn!("could not capture login page markup: {err}"),
        }
        info!(
            "login diagnostics written to {} and {}",
            shot.display(),
            markup.display()
        );
    }

    async fn fetch_page(&mut self, page: PageId) -> Result<(), SessionError> {
        self.enter(Phase::for_page(page));
        info!("{} >>> {}", self.timestamp, self.phase);
        self.driver.navigate(self.config.info_url(page)).await?;
        self.wait_for_page(page).await?;
        let records = extract_value_pairs(
            self.driver.as_ref(),
            page,
            &self.config.customer_id,
            &self.timestamp,
        )
        .await?;
        self.records.extend(records);
        Ok(())
    }

    /// Waits for a page's rendering-complete probe: the facility detail
    /// container on the system page, a single title card with the expected
    /// prefix everywhere else.
    async fn wait_for_page(&self, page: PageId) -> Result<(), SessionError> {
        let driver = self.driver.as_ref();
        let probe = page.readiness_selector();
        let probe = &probe;
        match page.title_prefix() {
            None => {
                wait_until(
                    page.describe(),
                    DEFAULT_MAX_ATTEMPTS,
                    POLL_INTERVAL,
                    move || async move { Ok(driver.find_elements(probe).await?.len() == 1) },
                )
                .await
            }
            Some(prefix) => {
                wait_until(
                    page.describe(),
                    DEFAULT_MAX_ATTEMPTS,
                    POLL_INTERVAL,
                    move || async move {
                        let cards = driver.find_elements(probe).await?;
                        match cards.as_slice() {
                            [card] => Ok(card.text().await?.starts_with(prefix)),
                            _ => Ok(false),
                        }
                    },
                )
                .await
            }
        }
    }

    async fn logout(&mut self) -> Result<(), SessionError> {
        self.enter(Phase::Logout);
        info!("{} >>> logout", self.timestamp);
        self.close_browser().await?;
        forward_records(self.sink.as_ref(), &self.records).await
    }

    /// Idempotent browser shutdown; the failure path reuses it so the
    /// browser is released no matter where a session stops.
    async fn close_browser(&mut self) -> Result<(), SessionError> {
        if self.browser_open {
            self.browser_open = false;
            self.driver.close().await?;
        }
        Ok(())
    }
}
