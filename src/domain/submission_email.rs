/// An email address that passed the `local@domain.tld` check, stored in its
/// normalized form: surrounding whitespace trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEmail(String);

impl SubmissionEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim_matches(is_pattern_whitespace);
        if !is_valid_email(trimmed) {
            return Err(format!("{s} is not a valid email address."));
        }
        Ok(Self(trimmed.to_lowercase()))
    }
}

/// Exactly one `@`, no whitespace, a non-empty local part and a domain with
/// a `.` that has at least one character on each side.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    let well_formed =
        |part: &str| !part.is_empty() && !part.contains(|c: char| c == '@' || is_pattern_whitespace(c));

    if !well_formed(local) || !well_formed(domain) {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The `\s` class of the browser-side pattern: Unicode `White_Space` minus
/// U+0085, plus the byte order mark U+FEFF.
pub fn is_pattern_whitespace(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        c => c.is_whitespace(),
    }
}

impl AsRef<str> for SubmissionEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubmissionEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubmissionEmail::parse(value)
    }
}

impl std::fmt::Display for SubmissionEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
