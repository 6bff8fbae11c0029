use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pagenav::{
    NavigationKind, PageToken, PaginationConfig, PaginationController, PaginationView,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagenav", about = "Bounded-width page index for large paginated lists")]
struct Cli {
    /// Log range decisions to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the page index and navigation buttons for one page.
    Range {
        #[command(flatten)]
        source: SourceArgs,
        /// Page to display (1-based).
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        current_page: i64,
    },
    /// Step through pages interactively, reading commands from stdin.
    ///
    /// Commands: first, prev, next, last, a visible page number, `...`, quit.
    Browse {
        #[command(flatten)]
        source: SourceArgs,
        /// Page to start on (1-based).
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        start_page: i64,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Number of items in the data set.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    total_count: i64,
    /// Items per page.
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    page_size: i64,
    /// Pages shown on each side of the current page.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    siblings: i64,
}

impl SourceArgs {
    fn config(&self, current_page: i64) -> Result<PaginationConfig> {
        PaginationConfig::from_signed(
            self.total_count,
            self.page_size,
            current_page,
            self.siblings,
        )
        .context("rejected pagination settings")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Range {
            source,
            current_page,
        } => run_range(&source, current_page)?,
        Commands::Browse { source, start_page } => {
            let stdin = io::stdin();
            run_browse(&source, start_page, stdin.lock(), io::stdout().lock())?
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "pagenav=debug" } else { "pagenav=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_range(source: &SourceArgs, current_page: i64) -> Result<()> {
    let config = source.config(current_page)?;
    let view = PaginationController::derive(&config).context("failed to derive page index")?;

    let mut out = io::stdout().lock();
    print_view(&mut out, &config, &view)?;
    for (kind, button) in view.navigation.iter() {
        writeln!(
            out,
            "{:<14}{:<10}-> {}",
            kind.label(),
            if button.enabled { "enabled" } else { "disabled" },
            button.target_page
        )?;
    }

    Ok(())
}

/// One line of browse input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseCommand {
    Navigate(NavigationKind),
    Select(PageToken),
    Quit,
}

fn parse_command(line: &str) -> Result<BrowseCommand> {
    let command = match line {
        "first" | "f" => BrowseCommand::Navigate(NavigationKind::First),
        "prev" | "p" => BrowseCommand::Navigate(NavigationKind::Previous),
        "next" | "n" => BrowseCommand::Navigate(NavigationKind::Next),
        "last" | "l" => BrowseCommand::Navigate(NavigationKind::Last),
        "..." | "…" => BrowseCommand::Select(PageToken::Ellipsis),
        "quit" | "q" => BrowseCommand::Quit,
        other => {
            let page: usize = other
                .parse()
                .with_context(|| format!("unknown command '{other}'"))?;
            BrowseCommand::Select(PageToken::PageNumber(page))
        }
    };
    Ok(command)
}

fn run_browse<R: BufRead, W: Write>(
    source: &SourceArgs,
    start_page: i64,
    input: R,
    mut out: W,
) -> Result<()> {
    let mut config = source.config(start_page)?;
    let mut view = PaginationController::derive(&config)?;
    print_view(&mut out, &config, &view)?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err:#}")?;
                continue;
            }
        };

        let mut requested = None;
        let mut on_page_change = |page: usize| requested = Some(page);
        let handled = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Navigate(kind) => view.navigate(kind, &mut on_page_change),
            BrowseCommand::Select(PageToken::PageNumber(page)) if !view.tokens.contains_page(page) => {
                writeln!(out, "page {page} is not shown")?;
                continue;
            }
            BrowseCommand::Select(token) => view.select_token(token, &mut on_page_change),
        };

        match requested {
            Some(page) => {
                config = config.with_current_page(page);
                view = PaginationController::derive(&config)?;
                print_view(&mut out, &config, &view)?;
            }
            None if !handled => writeln!(out, "nothing to do")?,
            None => {}
        }
    }

    Ok(())
}

fn print_view<W: Write>(out: &mut W, config: &PaginationConfig, view: &PaginationView) -> Result<()> {
    if !view.visible {
        writeln!(out, "(no page index: fewer than two positions)")?;
        return Ok(());
    }

    let button = |kind: NavigationKind, glyph: &str| {
        if view.navigation.button(kind).enabled {
            format!("[{glyph}]")
        } else {
            "[ ]".to_string()
        }
    };

    let pages: Vec<String> = view
        .entries()
        .into_iter()
        .map(|entry| {
            if entry.selected {
                format!("({})", entry.token)
            } else {
                entry.token.to_string()
            }
        })
        .collect();

    let items = config.current_item_range();
    writeln!(
        out,
        "{} {} {} {} {}    items {}..{} of {}",
        button(NavigationKind::First, "«"),
        button(NavigationKind::Previous, "‹"),
        pages.join(" "),
        button(NavigationKind::Next, "›"),
        button(NavigationKind::Last, "»"),
        items.start + 1,
        items.end,
        config.total_count
    )?;
    Ok(())
}
