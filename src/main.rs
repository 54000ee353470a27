//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::edit::PostEdit;
use folio_rs::commands::new::ContentSource;
use folio_rs::content::{CategoryFilter, PostFilter};
use folio_rs::notify;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Portfolio site content and admin tool", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Log in to the admin area
    Login { username: String, password: String },

    /// Log out of the admin area
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List blog posts
    #[command(alias = "ls")]
    List {
        /// Category to show (all, AI, Body Language, Dev/Design)
        #[arg(short = 'C', long, default_value = "all")]
        category: String,

        /// Search title and excerpt
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show a post
    Show { id: String },

    /// Create a new post (admin)
    New {
        #[arg(short, long)]
        title: String,

        #[arg(short = 'C', long)]
        category: String,

        /// Short summary; taken from <!-- more --> in a Markdown file when omitted
        #[arg(short, long)]
        excerpt: Option<String>,

        /// Inline HTML content
        #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
        content: Option<String>,

        /// Content file (.md is rendered, anything else is used as HTML)
        #[arg(long)]
        content_file: Option<PathBuf>,

        #[arg(short, long)]
        image_url: String,
    },

    /// Edit a post (admin)
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short = 'C', long)]
        category: Option<String>,

        #[arg(short, long)]
        excerpt: Option<String>,

        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        #[arg(long)]
        content_file: Option<PathBuf>,

        #[arg(short, long)]
        image_url: Option<String>,
    },

    /// Delete a post (admin)
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the project gallery
    Projects {
        /// Category to show (all, ai, body-language, dev-design)
        #[arg(short = 'C', long, conflicts_with = "fragment")]
        category: Option<String>,

        /// URL fragment selecting the initial filter, e.g. #ai
        #[arg(short, long)]
        fragment: Option<String>,
    },

    /// Count posts per category
    Categories,

    /// Log out and reseed the default posts
    Clean,

    /// Display version information
    Version,
}

fn content_source(content: Option<String>, file: Option<PathBuf>) -> Option<ContentSource> {
    match (content, file) {
        (_, Some(path)) => Some(ContentSource::File(path)),
        (Some(html), None) => Some(ContentSource::Inline(html)),
        (None, None) => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if let Commands::Init { folder } = &cli.command {
        let target_dir = if folder.is_absolute() {
            folder.clone()
        } else {
            base_dir.join(folder)
        };
        tracing::info!("Initializing site in {:?}", target_dir);
        folio_rs::commands::init::init_site(&target_dir)?;
        println!("Initialized site in {:?}", target_dir);
        return Ok(());
    }

    if let Commands::Version = cli.command {
        println!("folio version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let folio = folio_rs::Folio::new(&base_dir)?;
    let mut notices = folio.notifier().subscribe();

    let result = match cli.command {
        Commands::Login { username, password } => {
            folio_rs::commands::session::login(&folio, &username, &password).await
        }

        Commands::Logout => folio_rs::commands::session::logout(&folio),

        Commands::Whoami => folio_rs::commands::session::whoami(&folio),

        Commands::List { category, query } => {
            let category: CategoryFilter = category.parse()?;
            folio_rs::commands::list::run(&folio, &PostFilter::new(query, category))
        }

        Commands::Show { id } => folio_rs::commands::list::show(&folio, &id),

        Commands::New {
            title,
            category,
            excerpt,
            content,
            content_file,
            image_url,
        } => match content_source(content, content_file) {
            Some(source) => folio_rs::commands::new::create_post(
                &folio,
                &title,
                &category,
                excerpt.as_deref(),
                &source,
                &image_url,
            ),
            None => Err(anyhow::anyhow!("Either --content or --content-file is required")),
        },

        Commands::Edit {
            id,
            title,
            category,
            excerpt,
            content,
            content_file,
            image_url,
        } => {
            let edit = PostEdit {
                title,
                category,
                excerpt,
                content: content_source(content, content_file),
                image_url,
            };
            folio_rs::commands::edit::run(&folio, &id, edit)
        }

        Commands::Delete { id, yes } => folio_rs::commands::delete::run(&folio, &id, yes),

        Commands::Projects { category, fragment } => {
            let filter = match (category, fragment) {
                (Some(category), _) => category.parse()?,
                (None, Some(fragment)) => folio_rs::projects::filter_from_fragment(&fragment),
                (None, None) => CategoryFilter::All,
            };
            folio_rs::commands::projects::run(filter)
        }

        Commands::Categories => folio_rs::commands::list::categories(&folio),

        Commands::Clean => {
            folio_rs::commands::clean::run(&folio)?;
            println!("Cleaned successfully!");
            Ok(())
        }

        Commands::Init { .. } | Commands::Version => Ok(()),
    };

    for notice in notify::drain(&mut notices) {
        if notice.is_error() {
            eprintln!("{}", notice);
        } else {
            println!("{}", notice);
        }
    }

    result
}
