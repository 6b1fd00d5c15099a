use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str =
    concat!("linux:hot-titles:v", env!("CARGO_PKG_VERSION"), " (by /u/hot-titles)");

/// Settings for one fetch of a hot listing.
///
/// Defaults: `https://www.reddit.com`, a 10 second timeout and an
/// identifying user agent. Reddit throttles generic agents, so the
/// user agent should never be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Print the titles of the first 10 hot posts of a subreddit", long_about = None)]
pub struct Args {
    /// Subreddit to list, without the `r/` prefix
    #[clap(value_parser)]
    pub subreddit: Option<String>,
    /// Request timeout in seconds
    #[clap(short, long, value_parser, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
    #[clap(short, long, value_parser, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    #[clap(long, value_parser, env = "HOT_TITLES_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    #[clap(short, long)]
    pub verbose: bool,
}

impl From<&Args> for FetchConfig {
    fn from(args: &Args) -> Self {
        Self {
            base_url: args.base_url.clone(),
            user_agent: args.user_agent.clone(),
            timeout: Duration::from_secs(args.timeout),
        }
    }
}
