use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use log::error;

use recipe_search::{
    count_label, render_results, ApiConfig, HttpFetcher, LogIndicator, SearchSession, SortKey,
};

struct Cli {
    query: String,
    difficulty: Option<String>,
    sort: SortKey,
    html: bool,
}

fn parse_args() -> Result<Cli, String> {
    let mut cli = Cli {
        query: String::new(),
        difficulty: None,
        sort: SortKey::Relevance,
        html: false,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--difficulty" => {
                cli.difficulty = Some(args.next().ok_or("--difficulty needs a value")?);
            }
            "--sort" => {
                // unrecognized keys deliberately fall back to relevance
                cli.sort = SortKey::from_key(&args.next().ok_or("--sort needs a value")?);
            }
            "--html" => cli.html = true,
            "--help" | "-h" => {
                println!(
                    "Usage: recipe-search [QUERY] [--difficulty VALUE] [--sort KEY] [--html]\n\
                     Sort keys: relevance, title-asc, title-desc, difficulty"
                );
                std::process::exit(0);
            }
            word => {
                if !cli.query.is_empty() {
                    cli.query.push(' ');
                }
                cli.query.push_str(word);
            }
        }
    }

    Ok(cli)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let config = match ApiConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // A missing key halts everything before any request goes out
    let fetcher = match HttpFetcher::new(&config) {
        Ok(fetcher) => fetcher.with_indicator(Arc::new(LogIndicator)),
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut session = SearchSession::new(fetcher);
    session.set_difficulty(cli.difficulty.clone());
    session.set_sort(cli.sort);

    let results = match session.search(&cli.query).await {
        Ok(results) => results,
        Err(err) => {
            error!("Search error: {}", err);
            eprintln!("Failed to search recipes: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if cli.html {
        println!("{}", render_results(&results));
        return ExitCode::SUCCESS;
    }

    if results.is_empty() {
        println!("No recipes found. Try a different search.");
        return ExitCode::SUCCESS;
    }

    println!("{}", count_label(results.len()));
    for recipe in &results {
        println!(
            "- {} [{}] {}",
            recipe.display_title(),
            recipe.display_difficulty(),
            recipe.image_url()
        );
    }

    ExitCode::SUCCESS
}
