use crate::errors::BridgeError;
use crate::HTTP_CLIENT;
use failure::Error;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};

/// GETs `url_string` and returns the whole body. Sends `Authorization: Bearer` only
/// when a token is configured. Anything but a 2xx response is an error.
pub fn get_url_body(url_string: &str, bearer_token: &str, accept: &str) -> Result<String, Error> {
    if let Ok(url) = Url::parse(url_string) {
        let mut request = HTTP_CLIENT.get(url).header(ACCEPT, accept);
        if !bearer_token.is_empty() {
            request = request.bearer_auth(bearer_token);
        }
        let response = request.send()?;

        let status = response.status();
        debug!("--Network--: GET {} returned {}", url_string, status);
        if status.is_success() {
            Ok(response.text()?)
        } else {
            Err(BridgeError::HttpError {
                url: url_string.to_string(),
                status_code: status.as_u16(),
            }
            .into())
        }
    } else {
        Err(format_err!("Unable to parse url: {}", url_string))
    }
}

/// POSTs a urlencoded form. The status code is handed back with the body so the
/// caller can decide what a rejection looks like.
pub fn post_form(url_string: &str, form: &[(&str, &str)]) -> Result<(StatusCode, String), Error> {
    if let Ok(url) = Url::parse(url_string) {
        let response = HTTP_CLIENT.post(url).form(form).send()?;
        let status = response.status();
        debug!("--Network--: POST {} returned {}", url_string, status);
        Ok((status, response.text()?))
    } else {
        Err(format_err!("Unable to parse url: {}", url_string))
    }
}
