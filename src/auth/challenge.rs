use std::fmt::{self, Display, Formatter};
use std::mem;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Digest challenge parsed from a `WWW-Authenticate` header value.
#[derive(Debug, Clone, PartialEq)]
pub struct WwwAuthenticateHeader {
    /// Authentication realm; cameras usually report a fixed brand realm
    /// such as `iPolis`
    pub realm: String,
    /// Server nonce this challenge is scoped to
    pub nonce: String,
    /// Protection options offered by the server, verbatim
    /// (`auth` or a list like `auth, auth-int`)
    pub qop: String,
    /// Server opaque blob. Preserved for inspection; the rendered
    /// `Authorization` value does not echo it because the devices this
    /// client targets never issue one.
    pub opaque: Option<String>,
    /// Hash algorithm named by the server; `None` means MD5
    pub algorithm: Option<String>,
    /// True when the server reports that the previous nonce expired while
    /// the credentials themselves are still good
    pub stale: bool,
    /// Parameters this client has no use for, in order of appearance
    pub other: Vec<(String, String)>,
}

impl WwwAuthenticateHeader {
    /// Parse the raw header value of a 401 response.
    ///
    /// # Errors
    /// [`Error::MalformedChallenge`] when the scheme is not `Digest`, the
    /// parameter list is truncated, or `realm`/`nonce` are missing.
    /// [`Error::UnsupportedChallenge`] when the challenge carries no `qop`.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let rest = strip_scheme(input).ok_or_else(|| {
            Error::MalformedChallenge(format!("authentication scheme is not Digest: {input:?}"))
        })?;

        let mut realm = None;
        let mut nonce = None;
        let mut qop = None;
        let mut opaque = None;
        let mut algorithm = None;
        let mut stale = false;
        let mut other = Vec::new();

        for (key, value) in parse_params(rest)? {
            match key.as_str() {
                "realm" => realm = Some(value),
                "nonce" => nonce = Some(value),
                "qop" => qop = Some(value),
                "opaque" => opaque = Some(value),
                "algorithm" => algorithm = Some(value),
                "stale" => stale = value.eq_ignore_ascii_case("true"),
                _ => other.push((key, value)),
            }
        }

        Ok(Self {
            realm: realm.ok_or_else(|| {
                Error::MalformedChallenge(format!("missing \"realm\" in {input:?}"))
            })?,
            nonce: nonce.ok_or_else(|| {
                Error::MalformedChallenge(format!("missing \"nonce\" in {input:?}"))
            })?,
            // TODO: early Samsung Techwin firmware is said to answer with a
            // qop-less RFC 2069 challenge; support it if such a device shows up.
            qop: qop.ok_or_else(|| {
                Error::UnsupportedChallenge(
                    "challenge offers no qop; the qop-less legacy digest is not implemented".into(),
                )
            })?,
            opaque,
            algorithm,
            stale,
            other,
        })
    }

    /// Validate the challenge against what this client implements and pick
    /// the protection level for the response computation. MD5 only; `auth`
    /// only, since every request this client issues is a bodyless GET.
    pub fn supported_qop(&self) -> Result<&str> {
        if let Some(algorithm) = &self.algorithm {
            if !algorithm.eq_ignore_ascii_case("md5") {
                return Err(Error::UnsupportedAlgorithm(algorithm.clone()));
            }
        }
        self.qop
            .split(',')
            .map(str::trim)
            .find(|option| option.eq_ignore_ascii_case("auth"))
            .ok_or_else(|| {
                Error::UnsupportedChallenge(format!(
                    "qop options \"{}\" do not include auth",
                    self.qop
                ))
            })
    }
}

impl FromStr for WwwAuthenticateHeader {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

impl Display for WwwAuthenticateHeader {
    /// Wire form of the challenge. Used for diagnostics and for feeding the
    /// parser in tests; optional fields follow the required triple.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Digest realm=\"{}\", qop=\"{}\", nonce=\"{}\"",
            quote_value(&self.realm),
            quote_value(&self.qop),
            quote_value(&self.nonce)
        )?;
        if let Some(opaque) = &self.opaque {
            write!(f, ", opaque=\"{}\"", quote_value(opaque))?;
        }
        if self.stale {
            f.write_str(", stale=true")?;
        }
        if let Some(algorithm) = &self.algorithm {
            write!(f, ", algorithm={algorithm}")?;
        }
        Ok(())
    }
}

/// Escape a parameter value for embedding between double quotes.
pub(crate) fn quote_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Take the `Digest` scheme token off the front, case-insensitively.
fn strip_scheme(input: &str) -> Option<&str> {
    let scheme = input.get(..6)?;
    if !scheme.eq_ignore_ascii_case("digest") {
        return None;
    }
    let rest = &input[6..];
    if !rest.is_empty() && !rest.starts_with(|c: char| c.is_ascii_whitespace()) {
        return None;
    }
    Some(rest)
}

/// Split a `key=value, key="quoted \"value\"", ...` list into ordered pairs,
/// lowercasing keys and resolving backslash escapes inside quoted values.
fn parse_params(input: &str) -> Result<Vec<(String, String)>> {
    enum State {
        Separator,
        Name { start: usize },
        ValueStart,
        BareValue,
        QuotedValue,
        QuotedEscape,
    }

    let mut pairs = Vec::new();
    let mut state = State::Separator;
    let mut name = String::new();
    let mut value = String::new();

    for (at, c) in input.char_indices() {
        match state {
            State::Separator => {
                if c.is_alphabetic() {
                    state = State::Name { start: at };
                }
            }
            State::Name { start } => {
                if c == '=' {
                    name = input[start..at].trim().to_ascii_lowercase();
                    state = State::ValueStart;
                }
            }
            State::ValueStart => match c {
                '"' => state = State::QuotedValue,
                ',' => {
                    pairs.push((mem::take(&mut name), String::new()));
                    state = State::Separator;
                }
                _ => {
                    value.push(c);
                    state = State::BareValue;
                }
            },
            State::BareValue => {
                if c == ',' || c.is_ascii_whitespace() {
                    pairs.push((mem::take(&mut name), mem::take(&mut value)));
                    state = State::Separator;
                } else {
                    value.push(c);
                }
            }
            State::QuotedValue => match c {
                '"' => {
                    pairs.push((mem::take(&mut name), mem::take(&mut value)));
                    state = State::Separator;
                }
                '\\' => state = State::QuotedEscape,
                _ => value.push(c),
            },
            State::QuotedEscape => {
                value.push(c);
                state = State::QuotedValue;
            }
        }
    }

    match state {
        State::Separator => {}
        State::BareValue => pairs.push((name, value)),
        _ => {
            return Err(Error::MalformedChallenge(format!(
                "truncated parameter list: {input:?}"
            )))
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_device_challenge() {
        let parsed = WwwAuthenticateHeader::parse(
            r#"Digest realm="iPolis", nonce="0005d72dY1809479724fdcee8bc967e6b32cfa84579c40", qop="auth""#,
        )
        .unwrap();

        assert_eq!(
            parsed,
            WwwAuthenticateHeader {
                realm: "iPolis".to_string(),
                nonce: "0005d72dY1809479724fdcee8bc967e6b32cfa84579c40".to_string(),
                qop: "auth".to_string(),
                opaque: None,
                algorithm: None,
                stale: false,
                other: vec![],
            }
        );
    }

    #[test]
    fn parses_bare_values_and_preserves_unknown_keys() {
        let parsed = WwwAuthenticateHeader::parse(
            r#"Digest realm=Login, qop=auth, nonce=abc123, algorithm=MD5, opaque="0a1b2c", stale=TRUE, charset=UTF-8"#,
        )
        .unwrap();

        assert_eq!(parsed.realm, "Login");
        assert_eq!(parsed.nonce, "abc123");
        assert_eq!(parsed.qop, "auth");
        assert_eq!(parsed.algorithm.as_deref(), Some("MD5"));
        assert_eq!(parsed.opaque.as_deref(), Some("0a1b2c"));
        assert!(parsed.stale);
        assert_eq!(
            parsed.other,
            vec![("charset".to_string(), "UTF-8".to_string())]
        );
    }

    #[test]
    fn resolves_escapes_inside_quoted_values() {
        let parsed = WwwAuthenticateHeader::parse(
            r#"Digest realm="a realm with\\, weird \" characters", qop="auth", nonce="n""#,
        )
        .unwrap();

        assert_eq!(parsed.realm, "a realm with\\, weird \" characters");
    }

    #[test]
    fn scheme_token_is_required_but_case_insensitive() {
        assert!(matches!(
            WwwAuthenticateHeader::parse(r#"Basic realm="Login""#),
            Err(Error::MalformedChallenge(_))
        ));
        assert!(matches!(
            WwwAuthenticateHeader::parse(r#"realm="Login", nonce="abc123", qop="auth""#),
            Err(Error::MalformedChallenge(_))
        ));

        let parsed =
            WwwAuthenticateHeader::parse(r#"digest realm="Login", nonce="abc123", qop="auth""#)
                .unwrap();
        assert_eq!(parsed.realm, "Login");
    }

    #[test]
    fn missing_required_fields_are_malformed() {
        assert!(matches!(
            WwwAuthenticateHeader::parse(r#"Digest nonce="abc123", qop="auth""#),
            Err(Error::MalformedChallenge(_))
        ));
        assert!(matches!(
            WwwAuthenticateHeader::parse(r#"Digest realm="Login", qop="auth""#),
            Err(Error::MalformedChallenge(_))
        ));
    }

    #[test]
    fn qop_less_challenge_is_unsupported() {
        assert!(matches!(
            WwwAuthenticateHeader::parse(r#"Digest realm="Login", nonce="abc123""#),
            Err(Error::UnsupportedChallenge(_))
        ));
    }

    #[test]
    fn truncated_quoted_value_is_malformed() {
        assert!(matches!(
            WwwAuthenticateHeader::parse(r#"Digest realm="Login", nonce="abc"#),
            Err(Error::MalformedChallenge(_))
        ));
    }

    #[test]
    fn renders_and_parses_back() {
        let challenge = WwwAuthenticateHeader {
            realm: "iPolis".to_string(),
            nonce: "00000bf3Y8227304fd29fa65a4170f613ae76a5e51c441".to_string(),
            qop: "auth".to_string(),
            opaque: Some("5ccc069c403ebaf9f0171e9517f40e41".to_string()),
            algorithm: Some("MD5".to_string()),
            stale: true,
            other: vec![],
        };

        let rendered = challenge.to_string();
        assert_eq!(
            rendered,
            "Digest realm=\"iPolis\", qop=\"auth\", nonce=\"00000bf3Y8227304fd29fa65a4170f613ae76a5e51c441\", \
             opaque=\"5ccc069c403ebaf9f0171e9517f40e41\", stale=true, algorithm=MD5"
        );
        assert_eq!(WwwAuthenticateHeader::parse(&rendered).unwrap(), challenge);
    }

    #[test]
    fn output_escaping_survives_a_round_trip() {
        let challenge = WwwAuthenticateHeader {
            realm: r#"realm "with" \ specials"#.to_string(),
            nonce: "abc123".to_string(),
            qop: "auth".to_string(),
            opaque: None,
            algorithm: None,
            stale: false,
            other: vec![],
        };

        // Backslashes must double before quotes grow their escape.
        let rendered = challenge.to_string();
        assert!(rendered.contains(r#"realm="realm \"with\" \\ specials""#));
        assert_eq!(WwwAuthenticateHeader::parse(&rendered).unwrap(), challenge);
    }

    #[test]
    fn supported_qop_picks_auth_from_a_list() {
        let challenge =
            WwwAuthenticateHeader::parse(r#"Digest realm="r", nonce="n", qop="auth,auth-int""#)
                .unwrap();
        assert_eq!(challenge.supported_qop().unwrap(), "auth");
    }

    #[test]
    fn auth_int_only_is_unsupported() {
        let challenge =
            WwwAuthenticateHeader::parse(r#"Digest realm="r", nonce="n", qop="auth-int""#).unwrap();
        assert!(matches!(
            challenge.supported_qop(),
            Err(Error::UnsupportedChallenge(_))
        ));
    }

    #[test]
    fn non_md5_algorithm_is_unsupported() {
        let challenge = WwwAuthenticateHeader::parse(
            r#"Digest realm="r", nonce="n", qop="auth", algorithm=SHA-256"#,
        )
        .unwrap();
        assert!(matches!(
            challenge.supported_qop(),
            Err(Error::UnsupportedAlgorithm(_))
        ));

        let md5 = WwwAuthenticateHeader::parse(
            r#"Digest realm="r", nonce="n", qop="auth", algorithm=md5"#,
        )
        .unwrap();
        assert_eq!(md5.supported_qop().unwrap(), "auth");
    }
}
