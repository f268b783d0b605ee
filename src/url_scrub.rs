use url::Url;

/// Drops the `:port` from a build link, so `https://ci:8443/viewLog.html?x` becomes
/// `https://ci/viewLog.html?x`. Links that can't be parsed are passed through untouched.
pub fn scrub_port_from_url(web_url: &str) -> String {
    let mut url = match Url::parse(web_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("--Url--: Unable to parse '{}' ({}), leaving it as is.", web_url, e);
            return web_url.to_string();
        }
    };

    if url.set_port(None).is_err() {
        warn!("--Url--: '{}' can't carry a port, leaving it as is.", web_url);
        return web_url.to_string();
    }
    String::from(url)
}
