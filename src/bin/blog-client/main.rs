use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use spdlog::{debug, warn};

use blog_client::app::App;
use blog_client::card::Card;
use blog_client::composer::{Field, SubmitOutcome, PUBLISHED_MESSAGE};
use blog_client::config::Config;
use blog_client::feed::FeedState;
use blog_client::logger::configure_logger;
use blog_client::post::PostId;
use blog_client::view::feed_renderer::FeedRenderer;

use crate::config::{generate_cfg, open_config};

mod config;
mod config_data;

const CFG_FILE_NAME: &str = "blog-client.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config path
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List posts, newest first
    Feed(FeedArgs),
    /// Publish a new post
    Create(CreateArgs),
    /// Open a client path, like / or /create
    Open {
        path: String,
    },
    /// Show a single post in full
    Post {
        id: i64,
    },
    /// Check if the backend is up
    Health,
    /// Write a sample configuration file
    InitConfig {
        /// Where to write it. Defaults to the user config dir
        #[arg(short, long)]
        path: Option<String>,
    },
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// Show the full content of these posts
    #[arg(short, long)]
    expand: Vec<i64>,

    /// Show the full content of every post
    #[arg(long)]
    expand_all: bool,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Name of the author. If empty, OS user real name is being used
    #[arg(short, long)]
    author: Option<String>,

    /// Content of the post
    #[arg(short = 'b', long)]
    content: String,

    /// Cover image url
    #[arg(short, long)]
    image: Option<String>,
}

fn get_author(author: Option<String>) -> String {
    if let Some(name) = author {
        return name;
    }

    let name = whoami::realname();
    if name.trim().is_empty() {
        return whoami::username();
    }
    name
}

async fn feed_cmd(app: &mut App, args: FeedArgs) {
    app.navigate("/").await;

    if args.expand_all {
        app.expand_all();
    }
    for id in args.expand {
        if !app.toggle_card(PostId(id)) {
            warn!("Post {} is not in the feed", id);
        }
    }

    print!("{}", app.render());
}

async fn create_cmd(app: &mut App, args: CreateArgs) -> Result<()> {
    app.navigate("/create").await;
    app.set_field(Field::Title, &args.title);
    app.set_field(Field::Author, &get_author(args.author));
    app.set_field(Field::Content, &args.content);
    app.set_field(Field::Image, args.image.as_deref().unwrap_or(""));

    match app.submit().await {
        SubmitOutcome::Published(created) => {
            if let Some(post) = created {
                debug!("Created post {}", post.id);
            }
            println!("{}\n", PUBLISHED_MESSAGE);
            print!("{}", app.render());
            Ok(())
        }
        SubmitOutcome::Invalid | SubmitOutcome::Failed(_) => {
            print!("{}", app.render());
            bail!("Post was not published")
        }
    }
}

async fn post_cmd(app: &App, config: &Config, id: i64) -> Result<()> {
    let post = match app.api().get_post(PostId(id)).await {
        Ok(post) => post,
        Err(e) => {
            debug!("Error loading post {}: {}", id, e);
            bail!("{}", e.user_message())
        }
    };

    let mut card = Card::from_post(&post, &config.card_options());
    card.toggle();

    let renderer = FeedRenderer::new(config.paths.template_dir.as_deref())?;
    print!("{}", renderer.render(&FeedState::default(), &[card]));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path.map(PathBuf::from);

    if let Command::InitConfig { path } = &cli.command {
        match generate_cfg(path.as_ref().map(PathBuf::from)) {
            Ok(path) => println!("Sample config written to {}", path.display()),
            Err(err) => bail!(err),
        }
        return Ok(());
    }

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run blog-client --help");
            return Ok(());
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }
    debug!("Using backend at {}", config.api.base_url);

    let mut app = App::new(&config)?;

    match cli.command {
        Command::Feed(args) => feed_cmd(&mut app, args).await,
        Command::Create(args) => create_cmd(&mut app, args).await?,
        Command::Open { path } => {
            app.navigate(&path).await;
            print!("{}", app.render());
        }
        Command::Post { id } => post_cmd(&app, &config, id).await?,
        Command::Health => match app.api().health().await {
            Ok(health) => println!("{} {}", health.status, health.timestamp.unwrap_or_default()),
            Err(e) => bail!("{}", e.user_message()),
        },
        Command::InitConfig { .. } => {}
    }

    Ok(())
}
