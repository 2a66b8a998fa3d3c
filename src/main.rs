// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Get the HTML from a file, a URL or the command line / stdin
// 3. Extract the links and print them as a table or JSON
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;
mod logging;

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use link_extractor::{LinkExtractor, LinkInfo, UrlReference};

use cli::{Cli, Commands, OutputArgs};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole cause chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::File { path, base, output } => {
            if !output.json {
                println!("🔍 Extracting links from file: {}", path.display());
            }
            let links = LinkExtractor::new(base.as_deref()).extract_from_file(&path, output.unique)?;
            report(&links, output)
        }
        Commands::Url { url, timeout, output } => {
            if !output.json {
                println!("🔍 Extracting links from: {}", url);
            }
            let links = LinkExtractor::new(Some(url.as_str()))
                .extract_from_url_with_timeout(output.unique, Duration::from_secs(timeout))
                .await?;
            report(&links, output)
        }
        Commands::Html { text, base, output } => {
            let html = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let links = LinkExtractor::new(base.as_deref()).extract_from_html(&html, output.unique);
            report(&links, output)
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut html = String::new();
    std::io::stdin()
        .read_to_string(&mut html)
        .context("failed to read HTML from stdin")?;
    Ok(html)
}

fn report(links: &[UrlReference], output: OutputArgs) -> Result<i32> {
    let infos = LinkExtractor::validate(links);

    if output.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(0);
    }

    if infos.is_empty() {
        println!("⚠️  No links found");
        return Ok(0);
    }

    print_table(&infos);
    Ok(0)
}

// Prints one row per link plus a short summary
fn print_table(infos: &[LinkInfo]) {
    println!(
        "{:<4} {:<40} {:<50} {:<8} {:<24} {:<30}",
        "#", "RAW", "ABSOLUTE", "SCHEME", "DOMAIN", "PATH"
    );
    println!("{}", "=".repeat(161));

    for (index, info) in infos.iter().enumerate() {
        println!(
            "{:<4} {:<40} {:<50} {:<8} {:<24} {:<30}",
            index + 1,
            truncate(&info.raw, 40),
            truncate(info.absolute.as_deref().unwrap_or("-"), 50),
            info.scheme.as_deref().unwrap_or("-"),
            truncate(info.domain.as_deref().unwrap_or("-"), 24),
            truncate(info.path.as_deref().unwrap_or("-"), 30),
        );
    }

    println!();

    let absolute_count = infos.iter().filter(|i| i.is_absolute).count();
    let unresolved_count = infos.iter().filter(|i| i.absolute.is_none()).count();

    println!("📊 Summary:");
    println!("   🔗 Absolute: {}", absolute_count);
    println!("   ↪️  Relative: {}", infos.len() - absolute_count);
    println!("   ❓ Unresolved: {}", unresolved_count);
    println!("   📋 Total: {}", infos.len());
}

// Shortens text to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate("/docs", 10), "/docs");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("https://example.com/a/very/long/path", 12), "https://e...");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("https://сайт.рф/путь", 12), "https://с...");
    }
}
