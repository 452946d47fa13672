use std::fmt;
use std::str::FromStr;

/// The longest slug that [`citation_slug`] will produce.
pub const SLUG_MAX_LEN: usize = 24;

/// Builds a short slug (suitable for URL fragments and element ids) from an
/// ordered list of candidate strings.
///
/// Absent and empty candidates are skipped. Every other candidate is lowercased
/// and stripped of anything outside `[a-z0-9]`, then the results are joined with
/// `-` and cut down to the first [`SLUG_MAX_LEN`] characters. A candidate which
/// strips down to nothing still takes up its position in the joined output.
pub fn citation_slug<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut slug = parts
        .into_iter()
        .flatten()
        .filter(|part| !part.as_ref().is_empty())
        .map(|part| {
            part.as_ref()
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("-");

    // Only ASCII survives the filter above, so any byte offset is a char boundary.
    slug.truncate(SLUG_MAX_LEN);
    slug
}

/// The naming conventions used when deriving resource names from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// `[a-z0-9]`, everything else is removed.
    Service,
    /// `[a-z0-9-]`, everything else becomes `-`.
    Namespace,
    /// `[a-z0-9_-]`, everything else becomes `.`.
    Branch,
}

impl NameStyle {
    fn allows(&self, c: char) -> bool {
        let alphanumeric = c.is_ascii_lowercase() || c.is_ascii_digit();
        match self {
            NameStyle::Service => alphanumeric,
            NameStyle::Namespace => alphanumeric || c == '-',
            NameStyle::Branch => alphanumeric || c == '-' || c == '_',
        }
    }

    fn replacement(&self) -> Option<char> {
        match self {
            NameStyle::Service => None,
            NameStyle::Namespace => Some('-'),
            NameStyle::Branch => Some('.'),
        }
    }
}

impl FromStr for NameStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(NameStyle::Service),
            "namespace" => Ok(NameStyle::Namespace),
            "branch" => Ok(NameStyle::Branch),
            other => Err(format!(
                "'{other}' is not a supported name style, expected one of 'service', 'namespace' or 'branch'"
            )),
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameStyle::Service => write!(f, "service"),
            NameStyle::Namespace => write!(f, "namespace"),
            NameStyle::Branch => write!(f, "branch"),
        }
    }
}

/// Maps every character to exactly one lowercase character, so `İ` becomes `i`
/// rather than `i` followed by a combining dot.
fn simple_lowercase(c: char) -> char {
    match c {
        '\u{130}' => 'i',
        c => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Lowercases each part, replaces the characters `style` does not allow and joins
/// the results with `delimiter`. Unlike [`citation_slug`] nothing is skipped or truncated.
pub fn normalize_name<S: AsRef<str>>(style: NameStyle, delimiter: &str, parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| {
            let mut normalized = String::with_capacity(part.as_ref().len());
            for c in part.as_ref().chars().map(simple_lowercase) {
                if style.allows(c) {
                    normalized.push(c);
                } else if let Some(replacement) = style.replacement() {
                    normalized.push(replacement);
                }
            }
            normalized
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Option<&str> = None;

    #[test]
    fn slug_empty() {
        assert_eq!(citation_slug(Vec::<Option<&str>>::new()), "");
        assert_eq!(citation_slug([NONE, Some(""), NONE]), "");
    }

    #[test]
    fn slug_preserves_order() {
        assert_eq!(citation_slug([Some("Alpha"), Some("Beta")]), "alpha-beta");
        assert_eq!(citation_slug([Some("Beta"), Some("Alpha")]), "beta-alpha");
    }

    #[test]
    fn slug_strips_characters() {
        assert_eq!(citation_slug([Some("A!B@C#1")]), "abc1");
        assert_eq!(citation_slug([Some("Smith, J. (2019)")]), "smithj2019");
        assert_eq!(citation_slug([Some("Ünïcode Tëxt")]), "ncodetxt");
    }

    #[test]
    fn slug_skips_absent_parts() {
        assert_eq!(
            citation_slug([NONE, Some("Hello"), Some(""), Some("World")]),
            "hello-world"
        );
    }

    #[test]
    fn slug_keeps_position_of_stripped_parts() {
        assert_eq!(citation_slug([Some("a"), Some("!!"), Some("b")]), "a--b");
        assert_eq!(citation_slug([Some(" ")]), "");
    }

    #[test]
    fn slug_truncates() {
        let long = "abcdefghijklmnopqrstuvwxyzabcd";
        assert_eq!(long.len(), 30);
        assert_eq!(citation_slug([Some(long)]), &long[..24]);

        assert_eq!(
            citation_slug([Some("abcdefghijklmnopqrstuvw"), Some("xyz")]),
            "abcdefghijklmnopqrstuvw-"
        );
    }

    #[test]
    fn slug_accepts_owned_strings() {
        let parts = vec![Some("Doe".to_string()), None, Some("2021".to_string())];
        assert_eq!(citation_slug(parts), "doe-2021");
    }

    #[test]
    fn slug_invariants() {
        let inputs: Vec<Vec<Option<&str>>> = vec![
            vec![Some("The Quick Brown Fox"), Some("Jumps Over"), Some("The Lazy Dog")],
            vec![Some("ÀÉÎÕÜ"), Some("-- --"), Some("__init__")],
            vec![Some("1234567890"), Some("1234567890"), Some("1234567890")],
            vec![Some("\u{212A}elvin"), Some("İstanbul")],
        ];

        for input in inputs {
            let slug = citation_slug(input.clone());
            assert!(slug.len() <= SLUG_MAX_LEN, "{input:?} produced {slug}");
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{input:?} produced {slug}"
            );
        }
    }

    #[test]
    fn name_styles() {
        assert_eq!(normalize_name(NameStyle::Service, "", &["aaa/bbb"]), "aaabbb");
        assert_eq!(normalize_name(NameStyle::Namespace, "", &["aaa/bbb"]), "aaa-bbb");
        assert_eq!(normalize_name(NameStyle::Service, "", &["aaa-bbb"]), "aaabbb");
        assert_eq!(normalize_name(NameStyle::Namespace, "", &["aaa-bbb"]), "aaa-bbb");
        assert_eq!(
            normalize_name(NameStyle::Branch, "", &["Feature/Login_Page"]),
            "feature.login_page"
        );
    }

    #[test]
    fn name_replaces_each_character() {
        assert_eq!(
            normalize_name(NameStyle::Namespace, "", &["aaa한글 아아 bbb"]),
            "aaa------bbb"
        );
    }

    #[test]
    fn name_lowercases_one_character_at_a_time() {
        assert_eq!(normalize_name(NameStyle::Namespace, "", &["İ"]), "i");
        assert_eq!(normalize_name(NameStyle::Service, "", &["İstanbul"]), "istanbul");
        assert_eq!(normalize_name(NameStyle::Branch, "", &["ΟΔΟΣ"]), "....");
    }

    #[test]
    fn name_joins_without_skipping() {
        assert_eq!(
            normalize_name(NameStyle::Service, "-", &["My.Repo", "", "main"]),
            "myrepo--main"
        );
    }

    #[test]
    fn parse_name_style() {
        assert_eq!("service".parse::<NameStyle>(), Ok(NameStyle::Service));
        assert_eq!("namespace".parse::<NameStyle>(), Ok(NameStyle::Namespace));
        assert_eq!("branch".parse::<NameStyle>(), Ok(NameStyle::Branch));
        assert!("Service".parse::<NameStyle>().is_err());
        assert_eq!(NameStyle::Branch.to_string(), "branch");
    }
}
