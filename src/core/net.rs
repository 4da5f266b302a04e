// src/core/net.rs

// Blocking HTTP over reqwest. One client per run, requests one at a time.

use reqwest::blocking::{multipart::Form, Client, Response};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue, SET_COOKIE};

use crate::config::consts::{ORIGIN, USER_AGENT};
use crate::config::options::FetchOptions;
use crate::error::{GuideError, Result};

pub fn client(opts: &FetchOptions) -> Result<Client> {
    let c = Client::builder()
        .timeout(opts.timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(c)
}

/// Browser-like headers the EPG endpoint expects, plus the session credentials.
pub fn epg_headers(token: &str, cookie: &str, referer: &str) -> Result<HeaderMap> {
    fn value(v: &str, what: &str) -> Result<HeaderValue> {
        HeaderValue::from_str(v)
            .map_err(|e| GuideError::Credentials(format!("{what} is not a valid header value: {e}")))
    }

    let mut h = HeaderMap::new();
    h.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
    h.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(HeaderName::from_static("authorization-token"), value(token, "token")?);
    h.insert(header::ORIGIN, HeaderValue::from_static(ORIGIN));
    h.insert(header::REFERER, value(referer, "referer")?);
    h.insert(header::COOKIE, value(cookie, "cookie")?);
    Ok(h)
}

/// POST a multipart form and return the body of a 2xx response.
/// Non-2xx responses become `GuideError::Status` tagged with `page`.
pub fn post_form(
    client: &Client,
    url: &str,
    headers: HeaderMap,
    form: Form,
    page: u32,
) -> Result<String> {
    let resp = client.post(url).headers(headers).multipart(form).send()?;
    body_or_status(resp, page)
}

/// GET a page; returns `(name, value)` for every `Set-Cookie` header, in order.
pub fn get_cookies(client: &Client, url: &str) -> Result<Vec<(String, String)>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(GuideError::Status { page: 0, status: status.as_u16(), body: s!() });
    }
    Ok(resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(parse_set_cookie)
        .collect())
}

fn body_or_status(resp: Response, page: u32) -> Result<String> {
    let status = resp.status();
    let body = resp.text()?;
    if !status.is_success() {
        return Err(GuideError::Status { page, status: status.as_u16(), body });
    }
    Ok(body)
}

/// `name=value; Path=/; HttpOnly` → `(name, value)`
pub fn parse_set_cookie(line: &str) -> Option<(String, String)> {
    let pair = line.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    if name.is_empty() { return None; }
    Some((name.to_string(), value.trim().to_string()))
}
