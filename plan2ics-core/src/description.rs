//! Event description text and the scripture lookup link.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::reading::Reading;

/// Characters escaped inside a URL path segment.
///
/// Unreserved characters and `$ & + : = @` pass through; everything else,
/// including space, `,` `;` `/` and `?`, is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

const READING_BREAK: &str = "<br><br>";
const LINK_LABEL: &str = "Bible Gateway";

fn escape(text: &str) -> String {
    utf8_percent_encode(text, PATH_SEGMENT).to_string()
}

/// Builds lookup links of the form `{base}?search={query}&version={translation}`.
#[derive(Debug, Clone)]
pub struct LinkBuilder<'a> {
    base: &'a str,
    translation: &'a str,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(base: &'a str, translation: &'a str) -> Self {
        Self { base, translation }
    }

    pub fn search_query(readings: &[Reading]) -> String {
        readings
            .iter()
            .map(|reading| format!("{}+{}", escape(&reading.book), escape(&reading.passage_list())))
            .collect::<Vec<_>>()
            .join(escape(";").as_str())
    }

    pub fn link(&self, readings: &[Reading]) -> String {
        format!(
            "{}?search={}&version={}",
            self.base,
            Self::search_query(readings),
            escape(self.translation)
        )
    }
}

/// Human-readable description: one reading per line, then the lookup link.
pub fn render_description(readings: &[Reading], links: &LinkBuilder<'_>) -> String {
    let mut description = readings
        .iter()
        .map(Reading::to_string)
        .collect::<Vec<_>>()
        .join(READING_BREAK);

    if !readings.is_empty() {
        description.push_str(READING_BREAK);
    }
    description.push_str(&format!(
        "<a href=\"{}\">{}</a>",
        links.link(readings),
        LINK_LABEL
    ));

    description
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> LinkBuilder<'static> {
        LinkBuilder::new("https://www.biblegateway.com/passage/", "ESV")
    }

    #[test]
    fn escape_follows_path_segment_rules() {
        assert_eq!(escape("1 Samuel"), "1%20Samuel");
        assert_eq!(escape("2:1-10, 17:1"), "2:1-10%2C%2017:1");
        assert_eq!(escape(";"), "%3B");
        assert_eq!(escape("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(escape("$&+=@~._"), "$&+=@~._");
    }

    #[test]
    fn query_separates_readings_with_encoded_semicolon() {
        let readings = vec![
            Reading::with_passages("1 Samuel", ["2:1-10", "17:1"]),
            Reading::with_passages("Psalm", ["23"]),
        ];
        assert_eq!(
            LinkBuilder::search_query(&readings),
            "1%20Samuel+2:1-10%2C%2017:1%3BPsalm+23"
        );
    }

    #[test]
    fn link_includes_translation() {
        let readings = vec![Reading::with_passages("John", ["3:16"])];
        assert_eq!(
            gateway().link(&readings),
            "https://www.biblegateway.com/passage/?search=John+3:16&version=ESV"
        );
    }

    #[test]
    fn description_lists_readings_then_link() {
        let readings = vec![
            Reading::with_passages("Genesis", ["1"]),
            Reading::with_passages("Psalm", ["19"]),
        ];
        assert_eq!(
            render_description(&readings, &gateway()),
            "Genesis 1<br><br>Psalm 19<br><br>\
             <a href=\"https://www.biblegateway.com/passage/?search=Genesis+1%3BPsalm+19&version=ESV\">Bible Gateway</a>"
        );
    }

    #[test]
    fn description_of_placeholder_reading_omits_book() {
        let readings = vec![Reading::with_passages("", ["Foo", "Bar"])];
        let description = render_description(&readings, &gateway());
        assert!(description.starts_with("Foo, Bar<br><br>"), "{description}");
    }
}
