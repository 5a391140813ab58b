use anyhow::Result;
use bdiff::areas::session::Session;
use bdiff::artifacts::core::config::ScanConfig;
use bdiff::commands::porcelain::diff::DiffOptions;
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "bdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A fast heuristic byte diff and three-way merge",
    long_about = "This is a byte-level diff and three-way merge tool, written in Rust. \
    It does not compute a minimal edit script, \
    but finds a correct one quickly even for large or binary inputs.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, global = true, help = "Log scanner decisions to stderr")]
    verbose: bool,
    #[command(flatten)]
    tuning: Tuning,
}

#[derive(Args)]
struct Tuning {
    #[arg(long, global = true, help = "Substring length probed when resynchronizing")]
    cmp_len: Option<usize>,
    #[arg(long, global = true, help = "Size in bytes of each file read window")]
    window_size: Option<usize>,
    #[arg(long, global = true, help = "Iterations before the scanner switches to coarse mode")]
    coarse_after: Option<usize>,
}

impl Tuning {
    fn config(&self) -> ScanConfig {
        let mut config = ScanConfig::default();

        if let Some(cmp_len) = self.cmp_len {
            config = config.with_cmp_len(cmp_len);
        }
        if let Some(window_size) = self.window_size {
            config = config.with_window_size(window_size);
        }
        if let Some(coarse_after) = self.coarse_after {
            config = config
                .with_coarse_after(coarse_after)
                .with_file_coarse_after(coarse_after);
        }

        config
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "same-len",
        about = "Print the length of the common run at two offsets",
        long_about = "This command prints how many bytes of the two files are equal, \
        starting at the given offsets."
    )]
    SameLen {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(long, default_value_t = 0, help = "Offset into the first file")]
        a_offset: usize,
        #[arg(long, default_value_t = 0, help = "Offset into the second file")]
        b_offset: usize,
        #[arg(short, long, help = "Never end the run inside a UTF-8 sequence")]
        utf8: bool,
    },
    #[command(
        name = "rev-same-len",
        about = "Print the length of the common suffix",
        long_about = "This command prints how many trailing bytes the two files share."
    )]
    RevSameLen {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(short, long, help = "Never start the suffix inside a UTF-8 sequence")]
        utf8: bool,
    },
    #[command(
        name = "diff-len",
        about = "Print the length of the changed region at two offsets",
        long_about = "This command runs one resynchronization search and prints how many bytes \
        of each file differ before matching content resumes."
    )]
    DiffLen {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(long, help = "Offset into the first file")]
        a_offset: usize,
        #[arg(long, help = "Offset into the second file")]
        b_offset: usize,
        #[arg(short, long, help = "Keep region boundaries on UTF-8 boundaries")]
        utf8: bool,
        #[arg(short, long, help = "Search in coarse mode")]
        coarse: bool,
    },
    #[command(
        name = "diff",
        about = "Show the edits turning one file into another",
        long_about = "This command prints the edit list turning the first file into the second one. \
        Each edit shows the removed and the added bytes."
    )]
    Diff {
        #[arg(index = 1)]
        a: String,
        #[arg(index = 2)]
        b: String,
        #[arg(
            short,
            long,
            conflicts_with = "files",
            help = "Keep edit boundaries on UTF-8 boundaries (in-memory diff only)"
        )]
        utf8: bool,
        #[arg(short, long, help = "Stream the files instead of loading them into memory")]
        files: bool,
        #[arg(short, long, help = "Show the edits turning the second file into the first")]
        reverse: bool,
        #[arg(long, help = "Print one edit per line as offsets and lengths")]
        raw: bool,
    },
    #[command(
        name = "merge",
        about = "Merge two descendants of a common ancestor",
        long_about = "This command merges the changes made to the ancestor by the left \
        and the right file. Where both change the same bytes, the left change wins."
    )]
    Merge {
        #[arg(index = 1)]
        ancestor: String,
        #[arg(index = 2)]
        left: String,
        #[arg(index = 3)]
        right: String,
        #[arg(short, long, help = "Write the merged bytes to this file instead of stdout")]
        output: Option<String>,
        #[arg(short, long, help = "Keep edit boundaries on UTF-8 boundaries")]
        utf8: bool,
        #[arg(long, help = "Print the merge list instead of the merged bytes")]
        raw: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let pwd = std::env::current_dir()?;
    let mut session = Session::new(
        &pwd.to_string_lossy(),
        Box::new(std::io::stdout()),
        cli.tuning.config(),
    )?;

    match &cli.command {
        Commands::SameLen {
            a,
            b,
            a_offset,
            b_offset,
            utf8,
        } => session.same_len(a, b, *a_offset, *b_offset, *utf8)?,
        Commands::RevSameLen { a, b, utf8 } => session.rev_same_len(a, b, *utf8)?,
        Commands::DiffLen {
            a,
            b,
            a_offset,
            b_offset,
            utf8,
            coarse,
        } => session.diff_len(a, b, *a_offset, *b_offset, *utf8, *coarse)?,
        Commands::Diff {
            a,
            b,
            utf8,
            files,
            reverse,
            raw,
        } => session.diff(a, b, DiffOptions::new(*utf8, *files, *reverse, *raw))?,
        Commands::Merge {
            ancestor,
            left,
            right,
            output,
            utf8,
            raw,
        } => session.merge(ancestor, left, right, output.as_deref(), *utf8, *raw)?,
    }

    Ok(())
}
