use anyhow::{Context, Result};
use scrapview_config::Config;
use scrapview_engine::{PageMeta, parse_line, render_page};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, process};

struct Args {
    page: String,
    project: Option<String>,
    title: Option<String>,
    json: bool,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut project = None;
    let mut title = None;
    let mut json = false;
    let mut page = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--project" => {
                i += 1;
                project = Some(args.get(i)?.clone());
            }
            "--title" => {
                i += 1;
                title = Some(args.get(i)?.clone());
            }
            "--json" => json = true,
            arg if page.is_none() => page = Some(arg.to_string()),
            _ => return None,
        }
        i += 1;
    }

    Some(Args {
        page: page?,
        project,
        title,
        json,
    })
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [--project <name>] [--title <title>] [--json] <page-file>");
    eprintln!("Pass '-' as the page file to read from stdin.");
    eprintln!(
        "The default project comes from the config file at {}",
        Config::config_path().display()
    );
    process::exit(1);
}

fn main() -> Result<()> {
    env_logger::init();

    let raw_args: Vec<String> = env::args().collect();
    let Some(args) = parse_args(&raw_args) else {
        usage(&raw_args[0]);
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let Some(project) = args
        .project
        .or_else(|| config.as_ref().map(|c| c.default_project.clone()))
    else {
        eprintln!("Error: No project given and no config file found");
        usage(&raw_args[0]);
    };

    let (text, default_title) = read_page(&args.page, config.as_ref())?;
    let meta = PageMeta {
        title: args.title.unwrap_or(default_title),
        project,
    };

    if args.json {
        print_ast(&text)?;
        return Ok(());
    }

    let fragments = render_page(&meta, &text);
    println!("{}", fragments.join("<br />\n"));
    Ok(())
}

/// Reads the page text, resolving relative paths against the configured
/// pages directory. Returns the text and a title derived from the source.
fn read_page(page: &str, config: Option<&Config>) -> Result<(String, String)> {
    if page == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read page from stdin")?;
        return Ok((text, "stdin".to_string()));
    }

    let mut path = PathBuf::from(page);
    if path.is_relative()
        && let Some(dir) = config.and_then(|c| c.pages_dir.as_ref())
    {
        path = dir.join(path);
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read page file '{}'", path.display()))?;
    let title = title_from_path(&path);
    Ok((text, title))
}

fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string())
}

/// Dumps the parsed syntax tree as JSON, one array entry per line. Lines
/// that fail to parse are logged and skipped, matching the render path.
fn print_ast(text: &str) -> Result<()> {
    let mut lines = Vec::new();
    for (number, raw) in text.lines().enumerate() {
        match parse_line(raw) {
            Ok(line) => lines.push(line),
            Err(err) => log::warn!("skipping line {}: {err}", number + 1),
        }
    }
    let json = serde_json::to_string_pretty(&lines).context("Failed to serialize syntax tree")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("scrapview-cli")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn positional_page_only() {
        let parsed = parse_args(&args(&["page.txt"])).unwrap();
        assert_eq!(parsed.page, "page.txt");
        assert!(parsed.project.is_none());
        assert!(!parsed.json);
    }

    #[test]
    fn flags_in_any_order() {
        let parsed = parse_args(&args(&["--json", "page.txt", "--project", "help"])).unwrap();
        assert_eq!(parsed.page, "page.txt");
        assert_eq!(parsed.project.as_deref(), Some("help"));
        assert!(parsed.json);
    }

    #[test]
    fn missing_flag_value_is_rejected() {
        assert!(parse_args(&args(&["page.txt", "--project"])).is_none());
    }

    #[test]
    fn missing_page_is_rejected() {
        assert!(parse_args(&args(&["--json"])).is_none());
    }

    #[test]
    fn second_positional_is_rejected() {
        assert!(parse_args(&args(&["a.txt", "b.txt"])).is_none());
    }

    #[test]
    fn title_comes_from_file_stem() {
        assert_eq!(title_from_path(Path::new("/x/My Page.txt")), "My Page");
    }
}
