use crate::errors::BridgeError;

/// The build a TeamCity trigger is talking about, e.g. `"VCS Trigger; MyBuild, #42 (master)"`.
#[derive(Debug, PartialEq)]
pub struct TriggerSource {
    pub build_name: String,
    pub build_number: i64,
}

/// Splits a trigger source of the form `<reason>; <build name>, <build info>#<number>...`.
///
/// Both separators are expected to be followed by a single space, which is skipped.
pub fn parse_source(source: &str) -> Result<TriggerSource, BridgeError> {
    let reason_end = source
        .find(';')
        .ok_or_else(|| BridgeError::source_parse(source, "missing ';' after the trigger reason"))?;
    let name_end = source
        .find(',')
        .ok_or_else(|| BridgeError::source_parse(source, "missing ',' after the build name"))?;

    let build_name = source
        .get(reason_end + 2..name_end)
        .ok_or_else(|| BridgeError::source_parse(source, "build name is empty or out of place"))?;
    let build_info = source
        .get(name_end + 2..)
        .ok_or_else(|| BridgeError::source_parse(source, "no build information after the build name"))?;

    let number_start = build_info
        .find('#')
        .ok_or_else(|| BridgeError::source_parse(source, "missing '#' before the build number"))?;

    Ok(TriggerSource {
        build_name: build_name.to_string(),
        build_number: parse_leading_int(&build_info[number_start + 1..]),
    })
}

/// Reads an integer the way C's `atoi` does: leading whitespace and an optional sign,
/// then as many digits as there are. Anything after the digits is ignored, and no
/// digits at all means 0. Out-of-range values saturate.
pub fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, digit| {
            let digit = i64::from(digit - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}
