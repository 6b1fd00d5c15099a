use std::io::Write;

use clap::Parser;

use crate::config::{Args, FetchConfig};
use crate::hot_posts::{build_client, fetch_hot_titles};
use crate::output::write_outcome;

mod config;
mod error;
mod hot_posts;
mod logger;
mod models;
mod output;

const USAGE: &str = "Please pass an argument for the subreddit to search.";

fn subreddit_arg(args: &Args) -> Option<&str> {
    args.subreddit.as_deref().filter(|name| !name.is_empty())
}

async fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), anyhow::Error> {
    let Some(subreddit) = subreddit_arg(args) else {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    };

    let config = FetchConfig::from(args);
    tracing::debug!(?config, "fetch configuration");

    let outcome = match build_client(&config) {
        Ok(client) => fetch_hot_titles(&client, &config, subreddit).await,
        Err(e) => {
            tracing::error!(error = %e, "could not build HTTP client");
            Err(e)
        }
    };

    write_outcome(out, &outcome)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args: Args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock()).await
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::Args;
    use crate::{run, USAGE};

    async fn run_with(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let mut buf = Vec::new();
        run(&args, &mut buf).await.unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn missing_subreddit_prints_usage() {
        assert_eq!(run_with(&["hot-titles"]).await, format!("{}\n", USAGE));
    }

    #[tokio::test]
    async fn empty_subreddit_prints_usage() {
        assert_eq!(run_with(&["hot-titles", ""]).await, format!("{}\n", USAGE));
    }

    #[tokio::test]
    async fn prints_titles_from_the_listing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/r/python/hot.json");
                then.status(200).json_body(json!({ "data": { "children": [
                    { "data": { "title": "A" } },
                    { "data": { "title": "B" } }
                ] } }));
            })
            .await;
        let base_url = server.base_url();

        let printed = run_with(&["hot-titles", "--base-url", &base_url, "python"]).await;

        assert_eq!(printed, "A\nB\n");
    }

    #[tokio::test]
    async fn unknown_subreddit_prints_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/r/this_subreddit_should_not_exist_xyz/hot.json");
                then.status(404);
            })
            .await;
        let base_url = server.base_url();

        let printed = run_with(&[
            "hot-titles",
            "--base-url",
            &base_url,
            "this_subreddit_should_not_exist_xyz",
        ])
        .await;

        assert_eq!(printed, "None\n");
    }
}
