use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gnews_async::GNewsConfig;
use gnews_async::types::ResponseMode;
use news_tools::NewsTools;
use news_tools::fmt::TextFormat;
use news_tools::types::{GetTopHeadlinesInput, NewsOutput, SearchNewsInput};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gnews")]
#[command(about = "Search news and fetch top headlines via the GNews API")]
#[command(version)]
struct Args {
    /// Load .env from current directory
    #[arg(long = "dot-env", global = true)]
    dot_env: bool,

    /// Override the API base URL (default: https://gnews.io/api/v4)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Return the upstream JSON body instead of normalized articles
    #[arg(long, global = true)]
    raw: bool,

    /// Print JSON instead of a text listing
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search articles by keyword
    Search {
        /// Search keywords
        query: String,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        country: Option<String>,
        /// Fields to search in, e.g. title,description,content
        #[arg(long = "in")]
        search_in: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long = "from")]
        start_date: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long = "to")]
        end_date: Option<String>,
        /// publishedAt or relevance
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// Fetch top headlines
    Headlines {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        country: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long = "from")]
        start_date: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long = "to")]
        end_date: Option<String>,
        #[arg(long)]
        query: Option<String>,
    },
    /// List registered tools with their input schemas
    Tools,
    /// Call a registered tool with JSON arguments
    Call {
        /// Tool name, e.g. search_news
        name: String,
        /// JSON object of arguments
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.dot_env {
        let _ = dotenvy::dotenv(); // ignore errors
    }

    // stdout carries results only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gnews=info,gnews_async=info,news_tools=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let tools = Arc::new(build_tools(&args));
    tracing::debug!(
        base_url = tools.client().config().api_base(),
        mode = ?tools.mode(),
        "gnews ready"
    );
    run(args, tools).await
}

fn build_tools(args: &Args) -> NewsTools {
    let mut config = GNewsConfig::from_env();
    if let Some(base) = &args.base_url {
        config = config.with_api_base(base);
    }
    let mode = if args.raw {
        ResponseMode::Raw
    } else {
        ResponseMode::Normalized
    };
    NewsTools::new(config).with_mode(mode)
}

async fn run(args: Args, tools: Arc<NewsTools>) -> Result<()> {
    match args.command {
        Commands::Search {
            query,
            language,
            country,
            search_in,
            start_date,
            end_date,
            sort_by,
        } => {
            let input = SearchNewsInput {
                query,
                language,
                country,
                search_in,
                start_date,
                end_date,
                sort_by,
            };
            let out = news_tools::search::search_news(&tools, input).await?;
            print_output(&out, args.json)
        }
        Commands::Headlines {
            category,
            language,
            country,
            start_date,
            end_date,
            query,
        } => {
            let input = GetTopHeadlinesInput {
                category,
                language,
                country,
                start_date,
                end_date,
                query,
            };
            let out = news_tools::headlines::get_top_headlines(&tools, input).await?;
            print_output(&out, args.json)
        }
        Commands::Tools => {
            let registry = news_tools::build_registry(tools);
            list_tools(&registry, args.json)
        }
        Commands::Call { name, args: raw } => {
            let registry = news_tools::build_registry(tools);
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("--args must be a JSON object")?;
            let result = registry.dispatch_json_formatted(&name, value).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result.data)?);
            } else {
                println!("{}", result.text);
            }
            Ok(())
        }
    }
}

fn print_output(out: &NewsOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(out)?);
    } else {
        print!("{}", out.fmt_text());
    }
    Ok(())
}

fn list_tools(registry: &news_tools::ToolRegistry, json: bool) -> Result<()> {
    let entries: Vec<serde_json::Value> = registry
        .list_names()
        .into_iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "description": registry.description(name),
                "input_schema": registry.input_schema(name),
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry["name"].as_str().unwrap_or_default());
        println!("  {}", entry["description"].as_str().unwrap_or_default());
        println!("  schema: {}", entry["input_schema"]);
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let args = Args::try_parse_from([
            "gnews",
            "search",
            "climate change",
            "--language",
            "fr",
            "--from",
            "2024-01-01",
            "--raw",
            "--json",
        ])
        .unwrap();
        assert!(args.raw);
        assert!(args.json);
        match args.command {
            Commands::Search {
                query,
                language,
                start_date,
                end_date,
                ..
            } => {
                assert_eq!(query, "climate change");
                assert_eq!(language.as_deref(), Some("fr"));
                assert_eq!(start_date.as_deref(), Some("2024-01-01"));
                assert_eq!(end_date, None);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn call_defaults_to_empty_args() {
        let args = Args::try_parse_from(["gnews", "call", "get_top_headlines"]).unwrap();
        match args.command {
            Commands::Call { name, args } => {
                assert_eq!(name, "get_top_headlines");
                assert_eq!(args, "{}");
            }
            _ => panic!("expected call"),
        }
    }
}
