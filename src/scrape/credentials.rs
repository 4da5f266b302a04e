// src/scrape/credentials.rs
//
// Short-lived session credentials for the EPG endpoint: the value of the
// `channelguidetoken` cookie, sent back as `authorization-token`, plus the
// full cookie header of the same session.

use std::env;
#[cfg(feature = "browser")]
use std::{thread, time::{Duration, Instant}};

use reqwest::blocking::Client;

#[cfg(feature = "browser")]
use crate::config::consts::BROWSER_POLL_MS;
use crate::config::consts::{ENV_COOKIE, ENV_TOKEN, TOKEN_COOKIE};
use crate::core::net;
use crate::error::{GuideError, Result};

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub auth_token: String,
    pub cookie_header: String,
}

impl Credentials {
    /// Both parts must be present and non-blank.
    pub fn new(auth_token: impl Into<String>, cookie_header: impl Into<String>) -> Result<Self> {
        let auth_token = auth_token.into().trim().to_string();
        let cookie_header = cookie_header.into().trim().to_string();
        if auth_token.is_empty() {
            return Err(GuideError::Credentials(s!("empty authorization token")));
        }
        if cookie_header.is_empty() {
            return Err(GuideError::Credentials(s!("empty cookie header")));
        }
        Ok(Self { auth_token, cookie_header })
    }
}

// Never print the secrets.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_token", &format_args!("<{} chars>", self.auth_token.len()))
            .field("cookie_header", &format_args!("<{} chars>", self.cookie_header.len()))
            .finish()
    }
}

pub trait CredentialSource {
    fn name(&self) -> &'static str;
    fn acquire(&self) -> Result<Credentials>;
}

/// Values handed in on the command line.
pub struct Explicit {
    pub token: Option<String>,
    pub cookie: Option<String>,
}

impl CredentialSource for Explicit {
    fn name(&self) -> &'static str { "command line" }

    fn acquire(&self) -> Result<Credentials> {
        from_parts(self.token.clone(), self.cookie.clone())
    }
}

/// `TV_GUIDE_TOKEN` + `TV_GUIDE_COOKIE`.
pub struct FromEnv;

impl CredentialSource for FromEnv {
    fn name(&self) -> &'static str { "environment" }

    fn acquire(&self) -> Result<Credentials> {
        from_parts(env::var(ENV_TOKEN).ok(), env::var(ENV_COOKIE).ok())
    }
}

fn from_parts(token: Option<String>, cookie: Option<String>) -> Result<Credentials> {
    match (token, cookie) {
        (Some(t), Some(c)) => Credentials::new(t, c),
        (None, None) => Err(GuideError::Credentials(s!("not provided"))),
        (Some(_), None) => Err(GuideError::Credentials(s!("token given without cookie header"))),
        (None, Some(_)) => Err(GuideError::Credentials(s!("cookie header given without token"))),
    }
}

/// Loads the public channel-guide page and keeps the cookies it sets.
pub struct PageHarvester<'a> {
    pub client: &'a Client,
    pub guide_page: &'a str,
}

impl CredentialSource for PageHarvester<'_> {
    fn name(&self) -> &'static str { "guide page" }

    fn acquire(&self) -> Result<Credentials> {
        logd!("Credentials: loading {}", self.guide_page);
        let cookies = net::get_cookies(self.client, self.guide_page)?;
        logd!("Credentials: {} cookies set", cookies.len());
        from_cookies(&cookies)
    }
}

/// Opens the guide page in headless Chrome and waits for page script to set
/// the token cookie; a plain GET never sees it when the site sets it client-side.
#[cfg(feature = "browser")]
pub struct BrowserSession<'a> {
    pub guide_page: &'a str,
    /// Upper bound on the wait for the token cookie.
    pub wait: Duration,
}

#[cfg(feature = "browser")]
impl CredentialSource for BrowserSession<'_> {
    fn name(&self) -> &'static str { "headless browser" }

    fn acquire(&self) -> Result<Credentials> {
        use headless_chrome::{Browser, LaunchOptions};

        let launch = LaunchOptions { headless: true, ..Default::default() };
        let browser = Browser::new(launch).map_err(browser_err)?;
        let tab = browser.new_tab().map_err(browser_err)?;

        logd!("Credentials: browser loading {}", self.guide_page);
        tab.navigate_to(self.guide_page).map_err(browser_err)?;
        tab.wait_until_navigated().map_err(browser_err)?;

        let deadline = Instant::now() + self.wait;
        loop {
            let cookies: Vec<(String, String)> = tab
                .get_cookies()
                .map_err(browser_err)?
                .into_iter()
                .map(|c| (c.name, c.value))
                .collect();

            if has_token(&cookies) || Instant::now() >= deadline {
                logd!("Credentials: browser holds {} cookies", cookies.len());
                return from_cookies(&cookies);
            }
            thread::sleep(Duration::from_millis(BROWSER_POLL_MS));
        }
    }
}

#[cfg(feature = "browser")]
fn browser_err(e: impl std::fmt::Display) -> GuideError {
    GuideError::Credentials(format!("browser: {e}"))
}

pub fn has_token(cookies: &[(String, String)]) -> bool {
    cookies.iter().any(|(name, _)| name == TOKEN_COOKIE)
}

/// Token cookie value + `name=value; name=value` header of every cookie.
pub fn from_cookies(cookies: &[(String, String)]) -> Result<Credentials> {
    let token = cookies
        .iter()
        .find(|(name, _)| name == TOKEN_COOKIE)
        .map(|(_, value)| value.clone())
        .ok_or_else(|| GuideError::Credentials(format!("could not find '{TOKEN_COOKIE}' cookie")))?;

    let header = cookies
        .iter()
        .map(|(n, v)| format!("{n}={v}"))
        .collect::<Vec<_>>()
        .join("; ");

    Credentials::new(token, header)
}

/// Try each source in order; the first that yields credentials wins.
pub fn acquire_first(sources: &[&dyn CredentialSource]) -> Result<Credentials> {
    let mut reasons = Vec::with_capacity(sources.len());
    for src in sources {
        match src.acquire() {
            Ok(c) => {
                logf!("Credentials: acquired from {}", src.name());
                return Ok(c);
            }
            Err(e) => {
                logd!("Credentials: {} failed: {}", src.name(), e);
                reasons.push(format!("{}: {}", src.name(), e));
            }
        }
    }
    Err(GuideError::Credentials(reasons.join("; ")))
}
