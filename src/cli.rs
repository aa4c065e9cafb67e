//! Command-line interface definitions.
//!
//! The scrape target, request header, timeout and tag vocabulary are
//! fixed; the only runtime option is the list of alert keywords.

use clap::Parser;

/// Scrape The Hacker News front page and print the articles as JSON.
///
/// # Examples
///
/// ```sh
/// # Plain run
/// thn_scraper
///
/// # Flag articles mentioning either keyword
/// thn_scraper -k lazarus --keyword lockbit
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Flag articles whose title or summary mentions this word (repeatable)
    #[arg(short = 'k', long = "keyword", value_name = "WORD")]
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["thn_scraper"]);
        assert!(cli.keywords.is_empty());
    }

    #[test]
    fn test_cli_repeated_keywords() {
        let cli = Cli::parse_from(["thn_scraper", "--keyword", "lazarus", "-k", "lockbit"]);
        assert_eq!(cli.keywords, vec!["lazarus", "lockbit"]);
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["thn_scraper", "--url", "https://example.com"]).is_err());
    }
}
