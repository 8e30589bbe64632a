use clap::{Parser, Subcommand};
use contentcraft::api::StatusFilter;
use contentcraft::index::RecordSelector;
use contentcraft::model::{ContentStatus, Panel};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "contentcraft", bin_name = "contentcraft", version = get_version())]
#[command(
    about = "Draft, publish, tag and filter content in an in-memory workspace",
    long_about = "Starts an interactive content workspace. Commands are read one per line \
                  from stdin; type `help` for the list. Nothing is saved when the session ends."
)]
pub struct Cli {
    /// Path to a config.json (defaults to $CONTENTCRAFT_CONFIG, then the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with an empty collection instead of the sample content
    #[arg(long)]
    pub no_samples: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the workspace session.
#[derive(Parser, Debug)]
#[command(
    name = "contentcraft",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Set the title (also regenerates the slug)
    Title {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the slug by hand
    Slug {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the body text
    Body {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the status: draft, published or scheduled
    Status { status: ContentStatus },

    /// Set the category: tutorial, guide, news, blog or none
    Category { category: String },

    /// Set the SEO title
    SeoTitle {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the SEO description
    SeoDesc {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Add or remove tags on the draft
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Attach, pick or clear the featured image
    Image {
        #[command(subcommand)]
        action: ImageAction,
    },

    /// Save the draft (create, or update when editing)
    Save,

    /// Discard the draft and start new content
    New,

    /// Show the draft
    Show,

    /// List content through the search and status filter
    #[command(alias = "ls")]
    List {
        /// Search titles and categories
        #[arg(short, long, num_args = 1..)]
        search: Option<Vec<String>>,

        /// Only show one status: all, draft, published or scheduled
        #[arg(long)]
        status: Option<StatusFilter>,

        /// Reset search and status filter
        #[arg(long)]
        clear: bool,
    },

    /// Load content into the editor (index or id prefix)
    #[command(alias = "e")]
    Edit { selector: RecordSelector },

    /// Delete content (index or id prefix)
    #[command(alias = "rm")]
    Delete { selector: RecordSelector },

    /// Switch panel: editor, list or media
    View { panel: Panel },

    /// Show the media library
    Media,

    /// Show workspace counters
    Stats,

    /// Show this help
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum TagAction {
    /// Add a tag
    Add {
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Remove a tag
    #[command(alias = "remove")]
    Rm {
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ImageAction {
    /// Upload an image file as the featured image
    Upload {
        path: PathBuf,

        /// MIME type, guessed from the extension when omitted
        #[arg(long)]
        mime: Option<String>,
    },

    /// Use a media library item (1-based) as the featured image
    Use { position: usize },

    /// Remove the featured image
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        ShellLine::try_parse_from(line.split_whitespace())
            .unwrap()
            .command
    }

    #[test]
    fn title_takes_the_rest_of_the_line() {
        match parse("title Getting Started - Part 1") {
            ShellCommand::Title { words } => {
                assert_eq!(words.join(" "), "Getting Started - Part 1")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn list_flags() {
        match parse("list --search getting started --status published") {
            ShellCommand::List {
                search,
                status,
                clear,
            } => {
                assert_eq!(search.unwrap().join(" "), "getting started");
                assert_eq!(status, Some(StatusFilter::Only(ContentStatus::Published)));
                assert!(!clear);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn selectors_and_panels() {
        assert!(matches!(
            parse("edit 2"),
            ShellCommand::Edit {
                selector: RecordSelector::Index(2)
            }
        ));
        assert!(matches!(
            parse("view media"),
            ShellCommand::View { panel: Panel::Media }
        ));
        assert!(ShellLine::try_parse_from(["status", "archived"]).is_err());
        assert!(ShellLine::try_parse_from(["frobnicate"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }
}
