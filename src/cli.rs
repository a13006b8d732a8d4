//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::testament::Testament;

#[derive(Debug, Parser)]
#[command(
    name = "scripture",
    version,
    about = "Browse, read and search Bible translations",
    long_about = "Browse, read and search Bible translations from a remote content provider.\n\n\
                  Run without a subcommand to open the interactive reader."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config.toml (default: <config_dir>/scripture-reader/config.toml).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Provider API key. Overrides BIBLE_API_KEY and the config file.
    #[arg(long = "api-key", value_name = "KEY", global = true)]
    pub api_key: Option<String>,

    /// Provider base URL.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available translations.
    Translations {
        /// Page to show (1-based).
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// List the books of a translation.
    Books {
        /// Translation id or abbreviation.
        translation: String,

        /// Only show one testament.
        #[arg(long, value_enum)]
        testament: Option<TestamentArg>,
    },

    /// List the chapters of a book.
    Chapters {
        translation: String,
        /// Book id, abbreviation or name.
        book: String,
    },

    /// Print a chapter.
    Read {
        translation: String,
        book: String,
        /// Chapter number or id.
        chapter: String,
    },

    /// List the verses of a chapter.
    Verses {
        translation: String,
        book: String,
        chapter: String,
    },

    /// Print a single verse by id, e.g. JHN.3.16.
    Verse {
        translation: String,
        #[arg(value_name = "VERSE_ID")]
        verse: String,
    },

    /// Full-text search within a translation.
    Search {
        translation: String,
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestamentArg {
    Old,
    New,
}

impl From<TestamentArg> for Testament {
    fn from(arg: TestamentArg) -> Self {
        match arg {
            TestamentArg::Old => Testament::Old,
            TestamentArg::New => Testament::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["scripture"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "scripture",
            "books",
            "de4e12af7f28f599-02",
            "--testament",
            "new",
            "--api-key",
            "secret",
        ])
        .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        match cli.command {
            Some(Command::Books { translation, testament }) => {
                assert_eq!(translation, "de4e12af7f28f599-02");
                assert_eq!(testament, Some(TestamentArg::New));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn verse_takes_an_id() {
        let cli = Cli::try_parse_from(["scripture", "verse", "KJV", "JHN.3.16"]).unwrap();
        match cli.command {
            Some(Command::Verse { translation, verse }) => {
                assert_eq!(translation, "KJV");
                assert_eq!(verse, "JHN.3.16");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn search_joins_words() {
        let cli = Cli::try_parse_from(["scripture", "search", "KJV", "love", "one", "another"])
            .unwrap();
        match cli.command {
            Some(Command::Search { query, page, .. }) => {
                assert_eq!(query.join(" "), "love one another");
                assert_eq!(page, 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn search_requires_a_query() {
        assert!(Cli::try_parse_from(["scripture", "search", "KJV"]).is_err());
    }
}
