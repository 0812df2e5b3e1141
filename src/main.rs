use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use mygit::areas::repository::Repository;
use mygit::artifacts::core::PagerWriter;
use mygit::commands::porcelain::log::LogOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mygit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version-control storage engine",
    long_about = "Stores project snapshots as content-addressed objects \
    linked into a single linear history.",
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
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "add", about = "Stage files for the next commit")]
    Add {
        #[arg(index = 1, required = true, help = "The files to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "status", about = "Show staged, modified and untracked files")]
    Status,
    #[command(name = "log", about = "Show the commit history of the current branch")]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "config",
        about = "Get or set the author identity",
        long_about = "Supported keys are user.name and user.email. Without a value the current setting is printed."
    )]
    Config {
        #[arg(index = 1, value_parser = ["user.name", "user.email"])]
        key: String,
        #[arg(index = 2)]
        value: Option<String>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw bytes of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "ls-tree", about = "List the entries of a tree")]
    LsTree {
        #[arg(index = 1, default_value = "HEAD", help = "HEAD, a commit SHA or a tree SHA")]
        tree_ish: String,
    },
}

/// Diagnostics go to stderr, filtered by `MYGIT_LOG`
fn init_tracing() {
    let filter = EnvFilter::try_from_env("MYGIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Init { path } => {
            let path = path.as_ref().map(PathBuf::from).unwrap_or_else(|| pwd.clone());
            let repository = Repository::new(pwd.join(path), Box::new(std::io::stdout()))?;

            let created = repository.init()?;
            repository.show_init(created)?;
        }
        Commands::Add { paths } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;
            let paths = paths.iter().map(|path| pwd.join(path)).collect::<Vec<_>>();

            repository.add_all(&paths)?;
        }
        Commands::Commit { message } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            let message = message.trim();

            let commit_oid = match author_date()? {
                Some(timestamp) => repository.commit_at(message, timestamp)?,
                None => repository.commit(message)?,
            };
            repository.show_commit(&commit_oid)?;
        }
        Commands::Status => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.show_status(std::io::stdout().is_terminal())?;
        }
        Commands::Log { oneline } => {
            let opts = LogOptions { oneline: *oneline };

            if use_pager() {
                let pager = minus::Pager::new();
                let repository = Repository::new(&pwd, Box::new(PagerWriter::new(pager.clone())))?;

                repository.show_log(&opts)?;
                minus::page_all(pager)?;
            } else {
                let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

                repository.show_log(&opts)?;
            }
        }
        Commands::Config { key, value } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            match (key.as_str(), value) {
                ("user.name", Some(value)) => repository.set_author_name(value)?,
                ("user.email", Some(value)) => repository.set_author_email(value)?,
                (key, None) => repository.show_author_setting(key.trim_start_matches("user."))?,
                (key, Some(_)) => anyhow::bail!("Unsupported config key: {key}"),
            }
        }
        Commands::CatFile { sha } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.show_cat_file(sha)?;
        }
        Commands::HashObject { write, file } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.show_hash_object(&pwd.join(file), *write)?;
        }
        Commands::LsTree { tree_ish } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.show_ls_tree(tree_ish)?;
        }
    }

    Ok(())
}

/// Page long output only for interactive sessions
fn use_pager() -> bool {
    std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
}

/// Commit time override, as unix seconds or `%Y-%m-%d %H:%M:%S %z`
fn author_date() -> Result<Option<chrono::DateTime<chrono::Utc>>> {
    let Ok(date) = std::env::var("MYGIT_AUTHOR_DATE") else {
        return Ok(None);
    };

    let timestamp = match date.trim().parse::<i64>() {
        Ok(seconds) => chrono::DateTime::from_timestamp(seconds, 0)
            .with_context(|| format!("MYGIT_AUTHOR_DATE out of range: {date}"))?,
        Err(_) => chrono::DateTime::parse_from_str(date.trim(), "%Y-%m-%d %H:%M:%S %z")
            .with_context(|| format!("Invalid MYGIT_AUTHOR_DATE: {date}"))?
            .to_utc(),
    };

    Ok(Some(timestamp))
}
