//! Turning positional unit tokens into per-tier counts.

use std::ffi::OsString;

use num_bigint::BigInt;

use crate::error::CliError;

/// Parse one token: either a bare integer or a comma-separated list.
///
/// List items are trimmed and empty items are skipped, so `1,,2,` reads as
/// `[1, 2]`. A token that yields nothing is rejected.
pub fn parse_token(token: &str) -> Result<Vec<BigInt>, CliError> {
    let malformed = || CliError::Malformed {
        token: token.to_string(),
    };

    if !token.contains(',') {
        let value = token.trim().parse::<BigInt>().map_err(|_| malformed())?;
        return Ok(vec![value]);
    }

    let values = token
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<BigInt>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(malformed());
    }
    Ok(values)
}

/// Concatenate every token's counts in order, tier 1 first.
pub fn parse_units<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<BigInt>, CliError> {
    if tokens.is_empty() {
        return Err(CliError::Usage(
            "at least one unit count is required".to_string(),
        ));
    }

    let mut counts = Vec::new();
    for token in tokens {
        counts.extend(parse_token(token.as_ref())?);
    }
    Ok(counts)
}

/// clap reads a comma list opening with a negative count (`-3,4`) as the
/// short flag `-3`. Peel leading negative counts off such lists so they reach
/// clap as plain negative numbers: `-3,-4,5` becomes `-3`, `-4`, `5`.
/// Remainders holding only blank items are dropped.
pub fn split_leading_negatives<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    for arg in args {
        if let Some(mut rest) = arg.to_str().filter(|token| opens_negative_list(token)) {
            while opens_negative_list(rest) {
                let Some((head, tail)) = rest.split_once(',') else {
                    break;
                };
                out.push(OsString::from(head.trim_end()));
                rest = tail;
            }
            if rest.split(',').any(|item| !item.trim().is_empty()) {
                out.push(OsString::from(rest));
            }
            continue;
        }
        out.push(arg);
    }
    out
}

fn opens_negative_list(token: &str) -> bool {
    token.contains(',')
        && token
            .strip_prefix('-')
            .and_then(|n| n.chars().next())
            .is_some_and(|c| c.is_ascii_digit())
}
