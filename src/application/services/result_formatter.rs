//! Text rendering of reverse image search results.

use crate::domain::entities::LensResult;

const BOLD_UPPER_A: u32 = 0x1D400;
const BOLD_LOWER_A: u32 = 0x1D41A;

/// Maps ASCII Latin letters to Mathematical Bold code points.
#[must_use]
pub fn to_bold(text: &str) -> String {
    text.chars().map(bold_char).collect()
}

fn bold_char(c: char) -> char {
    let base = match c {
        'A'..='Z' => BOLD_UPPER_A + (u32::from(c) - u32::from('A')),
        'a'..='z' => BOLD_LOWER_A + (u32::from(c) - u32::from('a')),
        _ => return c,
    };
    char::from_u32(base).unwrap_or(c)
}

/// Renders lens results as one message body.
#[derive(Debug, Clone, Copy)]
pub struct ResultFormatter {
    bold_labels: bool,
}

impl ResultFormatter {
    /// Creates a formatter. With `bold_labels` off, labels stay plain ASCII.
    #[must_use]
    pub const fn new(bold_labels: bool) -> Self {
        Self { bold_labels }
    }

    fn label(&self, text: &str) -> String {
        if self.bold_labels {
            to_bold(text)
        } else {
            text.to_string()
        }
    }

    /// One paragraph per result, separated by blank lines.
    #[must_use]
    pub fn format(&self, results: &[LensResult]) -> String {
        let title = self.label("Title:");
        let source = self.label("Source:");
        let link = self.label("Link:");

        results
            .iter()
            .map(|r| {
                format!(
                    "{title} {}\n{source} {}\n{link} [View]({})",
                    r.title, r.source, r.link
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Title:", "𝐓𝐢𝐭𝐥𝐞:" ; "label")]
    #[test_case("AZaz", "𝐀𝐙𝐚𝐳" ; "alphabet_bounds")]
    #[test_case("123 -_!", "123 -_!" ; "non_letters_pass_through")]
    #[test_case("éß", "éß" ; "non_ascii_letters_pass_through")]
    #[test_case("", "" ; "empty")]
    fn test_to_bold(input: &str, expected: &str) {
        assert_eq!(to_bold(input), expected);
    }

    #[test]
    fn test_format_paragraphs() {
        let results = vec![
            LensResult::new("Cat", "cats.com", "https://cats.com/1", "t1"),
            LensResult::new("Dog", "dogs.org", "https://dogs.org/2", "t2"),
        ];

        let body = ResultFormatter::new(false).format(&results);

        assert_eq!(
            body,
            "Title: Cat\nSource: cats.com\nLink: [View](https://cats.com/1)\n\n\
             Title: Dog\nSource: dogs.org\nLink: [View](https://dogs.org/2)"
        );
    }

    #[test]
    fn test_format_bold_labels_only() {
        let results = vec![LensResult::new("Plain", "src", "https://l", "t")];

        let body = ResultFormatter::default().format(&results);

        assert!(body.starts_with("𝐓𝐢𝐭𝐥𝐞: Plain\n𝐒𝐨𝐮𝐫𝐜𝐞: src\n"));
        assert!(body.ends_with("𝐋𝐢𝐧𝐤: [View](https://l)"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(ResultFormatter::default().format(&[]), "");
    }
}
