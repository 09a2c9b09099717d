use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use echoverse_client::{
    Api, Attachment, ClientConfig, LiveSearch, Moderation, Page, PostController, PostDraft,
    TagField, Translations, Window,
};
use echoverse_core::{AdminSection, Document, FollowLabel, PostNode, Region, TabEvent};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "echoverse")]
#[command(about = "Drive an EchoVerse server from the terminal")]
struct Cli {
    /// Base URL of the EchoVerse server
    #[arg(long, env = "ECHOVERSE_URL", default_value = "http://127.0.0.1:5000")]
    url: String,
    /// Value of the `session` cookie of a logged-in browser
    #[arg(long, env = "ECHOVERSE_SESSION")]
    session: Option<String>,
    /// Request timeout seconds
    #[arg(long, env = "ECHOVERSE_TIMEOUT_SECS", default_value_t = 12)]
    timeout_secs: u64,
    /// Answer yes to every confirmation
    #[arg(long, global = true)]
    yes: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one search immediately
    Search { query: String },
    /// Read queries from stdin, one edit per line, through the debounced search box
    Live {
        /// Debounce delay in milliseconds
        #[arg(long, default_value_t = 300)]
        delay_ms: u64,
    },
    Tags {
        #[command(subcommand)]
        command: TagsCommand,
    },
    Like { post_id: u64 },
    Comment { post_id: u64, content: String },
    /// Create a post; text, an audio file, or both
    Post {
        #[arg(long, default_value = "")]
        content: String,
        /// Comma separated tags
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long)]
        audio: Option<PathBuf>,
    },
    Delete { post_id: u64 },
    Follow { user_id: u64 },
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TagsCommand {
    /// Show the suggestions for what has been typed so far
    Suggest { input: String },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    BlockUser {
        user_id: u64,
        /// The user is currently blocked
        #[arg(long)]
        blocked: bool,
    },
    BlockPost {
        post_id: u64,
        /// The post is currently blocked
        #[arg(long)]
        blocked: bool,
    },
    Languages,
    Dictionary,
    /// Overwrite the server dictionary from the spreadsheet
    Sync,
}

/// Dialogs on the terminal: confirmations read y/n from stdin, alerts go to stderr.
struct TerminalWindow {
    assume_yes: bool,
    reloaded: AtomicBool,
}

impl TerminalWindow {
    fn new(assume_yes: bool) -> Self {
        Self { assume_yes, reloaded: AtomicBool::new(false) }
    }

    fn reloaded(&self) -> bool {
        self.reloaded.load(Ordering::Relaxed)
    }
}

impl Window for TerminalWindow {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn reload(&self) {
        self.reloaded.store(true, Ordering::Relaxed);
    }
}

fn print_region(region: &Region) {
    if region.visible {
        println!("{}", region.html);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let mut config = ClientConfig::new(cli.url.parse()?).with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(session) = cli.session {
        config = config.with_session(session);
    }
    let api = Api::new(&config)?;
    let window = Arc::new(TerminalWindow::new(cli.yes));
    let host: Arc<dyn Window> = window.clone();
    tracing::debug!(base = %api.base_url(), "client ready");

    match cli.command {
        Command::Search { query } => {
            let page = Page::new(Document::new(), host);
            LiveSearch::new(api, page.clone()).search_now(&query).await;
            page.read(|doc| print_region(&doc.search_results));
        }
        Command::Live { delay_ms } => {
            let page = Page::new(Document::new(), host);
            let mut search = LiveSearch::with_delay(api, page.clone(), Duration::from_millis(delay_ms));
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                search.input(&line);
            }
            search.settle().await;
            page.read(|doc| print_region(&doc.search_results));
        }
        Command::Tags { command: TagsCommand::Suggest { input } } => {
            let page = Page::new(Document::new(), host);
            let field = TagField::load(&api, page).await;
            tracing::info!(known = field.known_tags(), "tags loaded");
            for tag in field.input(&input) {
                println!("#{tag}");
            }
        }
        Command::Like { post_id } => {
            let page = Page::new(Document::with_posts([(post_id, PostNode::default())]), host);
            let liked = PostController::new(api, page.clone()).toggle_like(post_id).await;
            succeeded(liked.is_some(), "like")?;
            page.read(|doc| {
                if let Some(node) = doc.post(post_id) {
                    println!("{} {}", node.like_icon(), node.like_count);
                }
            });
        }
        Command::Comment { post_id, content } => {
            let page = Page::new(Document::with_posts([(post_id, PostNode::default())]), host);
            let added = PostController::new(api, page.clone()).add_comment(post_id, &content).await;
            succeeded(added.is_some(), "comment")?;
            page.read(|doc| {
                if let Some(comment) = doc.post(post_id).and_then(|node| node.comments.last()) {
                    println!("{comment}");
                }
            });
        }
        Command::Post { content, tags, audio } => {
            let audio = match audio {
                Some(path) => Some(Attachment::from_path(&path).await?),
                None => None,
            };
            let page = Page::new(Document::new(), host);
            let draft = PostDraft { content, tags, audio };
            let created = PostController::new(api, page.clone()).create_post(draft).await;
            if !created {
                page.read(|doc| print_region(&doc.post_error));
            }
            succeeded(created, "post")?;
            println!("posted");
        }
        Command::Delete { post_id } => {
            let page = Page::new(Document::with_posts([(post_id, PostNode::default())]), host);
            succeeded(PostController::new(api, page).delete_post(post_id).await, "delete")?;
            println!("deleted post {post_id}");
        }
        Command::Follow { user_id } => {
            let mut document = Document::new();
            document.follow_buttons.insert(user_id, FollowLabel::Follow);
            let page = Page::new(document, host);
            let label = LiveSearch::new(api, page).toggle_follow(user_id).await;
            succeeded(label.is_some(), "follow")?;
            println!("follow toggled for user {user_id}");
        }
        Command::Admin { command } => {
            let page = Page::new(Document::new(), host);
            let ok = match command {
                AdminCommand::BlockUser { user_id, blocked } => {
                    Moderation::new(api, page).toggle_user_block(user_id, blocked).await
                }
                AdminCommand::BlockPost { post_id, blocked } => {
                    Moderation::new(api, page).toggle_post_block(post_id, blocked).await
                }
                AdminCommand::Languages | AdminCommand::Dictionary | AdminCommand::Sync => {
                    let translations = Translations::new(api, page.clone());
                    translations.show_section(AdminSection::Languages, TabEvent { target: "languages" });
                    let ok = match command {
                        AdminCommand::Languages => translations.load_languages().await,
                        AdminCommand::Dictionary => translations.load_dictionary().await,
                        _ => translations.sync().await,
                    };
                    page.read(|doc| print_region(&doc.languages_display));
                    ok
                }
            };
            if window.reloaded() {
                println!("done; reload the admin page to see the change");
            }
            succeeded(ok, "admin action")?;
        }
    }
    Ok(())
}

/// Turns a controller outcome into the exit status. A declined confirmation counts as a failure.
fn succeeded(ok: bool, action: &str) -> Result<()> {
    ensure!(ok, "{action} did not go through");
    Ok(())
}
