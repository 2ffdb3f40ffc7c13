use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snippets::api::{self, AppState};
use snippets::client::SnippetsClient;
use snippets::config::Config;
use snippets::models::CreateSnippetInput;

#[derive(Parser)]
#[command(name = "snippets")]
#[command(about = "A tiny multi-author snippet board")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the snippet board server
    Serve {
        /// Address to bind (overrides SNIPPETS_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP (overrides SNIPPETS_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Post a snippet to a running server
    Post {
        /// Id of the posting author
        #[arg(short, long)]
        author: Option<String>,

        /// Snippet text
        body: String,
    },
    /// Print the feed from a running server
    Feed {
        /// Only show snippets by this author id
        #[arg(short, long)]
        author: Option<String>,
    },
    /// List known authors
    Authors,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "snippets=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(mut config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = config.snippet_store();
    config.seed_store(&store)?;

    let state = AppState::new(config.author_directory(), store, config.default_poster.clone());
    let app = api::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Snippet board listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(Config::from_env(), host, port).await?,
        Some(Commands::Post { author, body }) => {
            let client = SnippetsClient::from_env();
            let snippet = client
                .create_snippet(&CreateSnippetInput {
                    author_id: author,
                    body,
                })
                .await?;
            println!("Posted as {} at {}", snippet.author.name, snippet.posted_at.to_rfc3339());
        }
        Some(Commands::Feed { author }) => {
            let client = SnippetsClient::from_env();
            let entries = match author {
                Some(id) => client.list_author_snippets(&id).await?,
                None => client.list_snippets().await?,
            };
            for entry in entries {
                println!("{} ({}): {}", entry.author_name, entry.posted_at, entry.body);
            }
        }
        Some(Commands::Authors) => {
            let client = SnippetsClient::from_env();
            for author in client.list_authors().await? {
                println!("{}\t{}", author.id, author.name);
            }
        }
        None => serve(Config::from_env(), None, None).await?,
    }

    Ok(())
}
