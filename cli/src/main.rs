use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use linkline::{
    ApiConfig, AuthGateway, ContentService, CreateCommentInput, CreatePostInput, FileAttachment,
    LoginInput, ProfileUpdateInput, RegisterInput, SessionStore,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] linkline::ApiError),
    #[error("session storage failed: {0}")]
    Session(#[from] linkline::SessionError),
    #[error("failed to read attachment {path}: {source}")]
    ReadAttachment {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot locate a session file; pass --session-file or set LINKLINE_SESSION_FILE")]
    MissingSessionPath,
    #[error("not logged in")]
    NotLoggedIn,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "linkline-cli", about = "Linkline social-network API CLI")]
struct Cli {
    #[arg(long, env = "LINKLINE_BASE_URL", default_value = "http://127.0.0.1:8000/api")]
    base_url: String,

    /// Where the session document lives. Defaults to
    /// `$HOME/.linkline/session.json`.
    #[arg(long, env = "LINKLINE_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Auth(AuthCommand),
    Post(PostCommand),
    Comment(CommentCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, help = "Path to a profile photo to upload")]
        photo: Option<PathBuf>,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Refresh,
    Whoami,
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long, help = "Path to a profile photo to upload")]
        photo: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct PostCommand {
    #[command(subcommand)]
    command: PostSubcommand,
}

#[derive(Subcommand, Debug)]
enum PostSubcommand {
    List,
    ListUser {
        user_id: i64,
    },
    Create {
        #[arg(long)]
        content: String,
        #[arg(long, help = "Path to an image to attach")]
        image: Option<PathBuf>,
    },
    Delete {
        post_id: i64,
    },
    Like {
        post_id: i64,
    },
}

#[derive(Args, Debug)]
struct CommentCommand {
    #[command(subcommand)]
    command: CommentSubcommand,
}

#[derive(Subcommand, Debug)]
enum CommentSubcommand {
    Add {
        post_id: i64,
        #[arg(long)]
        content: String,
    },
    Delete {
        comment_id: i64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let session_path = match cli.session_file {
        Some(path) => path,
        None => default_session_file()?,
    };
    let store = Arc::new(SessionStore::open(session_path)?);
    let config = ApiConfig::new(cli.base_url);

    match cli.command {
        Command::Auth(auth) => run_auth(&config, &store, auth).await,
        Command::Post(post) => run_post(&config, &store, post).await,
        Command::Comment(comment) => run_comment(&config, &store, comment).await,
    }
}

async fn run_auth(
    config: &ApiConfig,
    store: &Arc<SessionStore>,
    auth: AuthCommand,
) -> Result<(), CliError> {
    let gateway = AuthGateway::new(config.clone(), Arc::clone(store));
    match auth.command {
        AuthSubcommand::Register {
            first_name,
            last_name,
            email,
            password,
            photo,
        } => {
            let profile_photo = photo.map(|path| read_attachment(&path)).transpose()?;
            let response = gateway
                .register(RegisterInput {
                    first_name,
                    last_name,
                    email,
                    password,
                    profile_photo,
                })
                .await?;
            eprintln!("registered as {}", response.user.email);
            print_json(&response.user)
        }
        AuthSubcommand::Login { email, password } => {
            let response = gateway.login(LoginInput { email, password }).await?;
            eprintln!("logged in as {}", response.user.email);
            print_json(&response.user)
        }
        AuthSubcommand::Logout => {
            gateway.logout().await?;
            eprintln!("logged out");
            Ok(())
        }
        AuthSubcommand::Refresh => {
            gateway.refresh().await?;
            eprintln!("tokens refreshed");
            Ok(())
        }
        AuthSubcommand::Whoami => {
            let user = store.user().ok_or(CliError::NotLoggedIn)?;
            print_json(&user)
        }
        AuthSubcommand::UpdateProfile {
            first_name,
            last_name,
            bio,
            photo,
        } => {
            let profile_photo = photo.map(|path| read_attachment(&path)).transpose()?;
            let user = gateway
                .update_profile(ProfileUpdateInput {
                    first_name,
                    last_name,
                    bio,
                    profile_photo,
                })
                .await?;
            print_json(&user)
        }
    }
}

async fn run_post(
    config: &ApiConfig,
    store: &Arc<SessionStore>,
    post: PostCommand,
) -> Result<(), CliError> {
    let service = ContentService::new(config.clone(), Arc::clone(store));
    match post.command {
        PostSubcommand::List => {
            let posts = service.list_posts().await?;
            print_json(&posts)
        }
        PostSubcommand::ListUser { user_id } => {
            let posts = service.list_user_posts(user_id).await?;
            print_json(&posts)
        }
        PostSubcommand::Create { content, image } => {
            let image = image.map(|path| read_attachment(&path)).transpose()?;
            let created = service.create_post(CreatePostInput { content, image }).await?;
            print_json(&created)
        }
        PostSubcommand::Delete { post_id } => {
            let response = service.delete_post(post_id).await?;
            eprintln!("{}", response.message);
            Ok(())
        }
        PostSubcommand::Like { post_id } => {
            let response = service.like_post(post_id).await?;
            eprintln!("{}", response.message);
            print_json(&response.post)
        }
    }
}

async fn run_comment(
    config: &ApiConfig,
    store: &Arc<SessionStore>,
    comment: CommentCommand,
) -> Result<(), CliError> {
    let service = ContentService::new(config.clone(), Arc::clone(store));
    match comment.command {
        CommentSubcommand::Add { post_id, content } => {
            let response = service
                .add_comment(post_id, CreateCommentInput { content })
                .await?;
            eprintln!("{}", response.message);
            print_json(&response.comment)
        }
        CommentSubcommand::Delete { comment_id } => {
            let response = service.delete_comment(comment_id).await?;
            eprintln!("{}", response.message);
            Ok(())
        }
    }
}

fn default_session_file() -> Result<PathBuf, CliError> {
    let home = std::env::var_os("HOME").ok_or(CliError::MissingSessionPath)?;
    Ok(PathBuf::from(home).join(".linkline").join("session.json"))
}

fn read_attachment(path: &Path) -> Result<FileAttachment, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadAttachment {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_owned());
    Ok(FileAttachment { file_name, bytes })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
