use anyhow::Context;
use clap::{Parser, Subcommand};
use knot_client_runtime::{telemetry, SessionServices};
use knot_config::{load as load_config, AppConfig, Theme};
use knot_messaging::{ChatSession, Conversation};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "knot-client")]
#[command(about = "Knot marketplace client (console by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive console (default)
    Console,
    /// Run a scripted walkthrough of the messaging flow
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => run_console().await,
        Commands::Demo => run_demo().await,
    }
}

async fn bootstrap() -> anyhow::Result<(AppConfig, SessionServices)> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("starting Knot client");

    let config = load_config().context("failed to load configuration")?;

    let services =
        SessionServices::initialise(&config).context("failed to initialise the session")?;
    Ok((config, services))
}

async fn run_console() -> anyhow::Result<()> {
    let (config, mut services) = bootstrap().await?;

    // the rendering layer's scroll/analytics obligations, as log lines
    let mut events = services.session.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            debug!(event = event.event_type_name(), "view notified");
        }
    });

    // the chat view opens without a post context, so rotation starts
    services.session.set_post_context(None);

    // the token bundle is handed to the rendering layer untouched
    let theme = Theme::by_name(&config.session.default_theme);

    println!("Knot Interactive Console");
    println!("theme: {}", theme.name);
    println!("Type '/help' for commands, '/quit' to exit");
    println!("---");

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        print!("> ");
        std::io::Write::flush(&mut std::io::stdout())?;

        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            break; // EOF
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                break;
            }
            "/help" | "/h" => print_help(),
            "/chats" | "/c" => print_chats(&services.session),
            "/posts" | "/p" => print_posts(&services.session),
            "/me" => print_me(&services.session),
            "/placeholder" => println!("placeholder: {}", services.session.placeholder()),
            "/context off" => {
                services.session.set_post_context(None);
                println!("Post context cleared; greetings are rotating again");
            }
            _ => {
                if let Some(id) = command.strip_prefix("/select ") {
                    select_chat(&mut services.session, id.trim());
                } else if let Some(text) = command.strip_prefix("/send ") {
                    send_message(&mut services.session, text);
                } else if let Some(id) = command.strip_prefix("/interest ") {
                    register_interest(&mut services.session, id.trim());
                } else if let Some(id) = command.strip_prefix("/context ") {
                    attach_context(&mut services.session, id.trim());
                } else {
                    println!("Unknown command: {command}");
                    println!("Type '/help' for available commands");
                }
            }
        }
    }

    services.session.close_chat();
    info!("client shut down");
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  /help, /h            - Show this help");
    println!("  /chats, /c           - List conversations");
    println!("  /posts, /p           - List posts");
    println!("  /select <chat-id>    - Focus a conversation");
    println!("  /send <text>         - Send a message into the focused conversation");
    println!("  /interest <post-id>  - Register interest in a post");
    println!("  /context <post-id>   - Anchor the chat to a post");
    println!("  /context off         - Clear the post context");
    println!("  /placeholder         - Show the current input placeholder");
    println!("  /me                  - Show the signed-in user");
    println!("  /quit, /exit, /q     - Exit");
}

fn print_chats(session: &ChatSession) {
    if session.conversations().is_empty() {
        println!("No conversations yet");
        return;
    }

    for conversation in session.conversations() {
        let marker = if session.active_conversation_id() == Some(conversation.id.as_str()) {
            "*"
        } else {
            " "
        };
        let other = conversation
            .other_participant(session.current_user_id())
            .and_then(|id| session.registry().user(id))
            .map(|user| user.name.clone())
            .unwrap_or_else(|| "unknown".to_string());
        let preview = conversation
            .last_message()
            .map(|m| m.text.clone())
            .unwrap_or_else(|| "(no messages)".to_string());
        println!(
            "{} {}: {} - {} ({} messages)",
            marker,
            conversation.id,
            other,
            preview,
            conversation.message_count()
        );
    }
}

fn print_posts(session: &ChatSession) {
    for post in session.registry().posts() {
        let author = session
            .registry()
            .user(&post.author_id)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| post.author_id.clone());
        let interested = if session.is_interested(&post.id) {
            " [interest registered]"
        } else {
            ""
        };
        println!(
            "{}: {} - {} ({}, {}){}",
            post.id,
            post.title,
            author,
            String::from(post.status),
            post.timestamp,
            interested
        );
    }
}

fn print_me(session: &ChatSession) {
    match session.current_user() {
        Some(user) => {
            println!(
                "{} ({}) - {}, {} transactions",
                user.name, user.id, user.school, user.transaction_count
            );
            if user.has_offers() {
                println!("offers: {}", user.offers.join(", "));
            }
        }
        None => println!("Signed-in user is not in the registry"),
    }
}

fn select_chat(session: &mut ChatSession, id: &str) {
    session.select_conversation(id);
    match session.resolve_active() {
        Some(conversation) => print_thread(session, conversation),
        None => println!("No conversation with ID {id}"),
    }
}

fn print_thread(session: &ChatSession, conversation: &Conversation) {
    println!("--- {} ---", conversation.id);
    for message in conversation.messages() {
        let sender = session
            .registry()
            .user(&message.sender_id)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| message.sender_id.clone());
        println!("[{}] {}: {}", message.timestamp, sender, message.text);
    }
}

fn send_message(session: &mut ChatSession, text: &str) {
    match session.send(text) {
        Ok(message) => println!("sent ({})", message.id),
        Err(error) => println!("not sent: {error}"),
    }
}

fn register_interest(session: &mut ChatSession, post_id: &str) {
    if session.register_interest(post_id) {
        println!("Interest registered for {post_id}");
    } else {
        println!("Interest was already registered for {post_id}");
    }
}

fn attach_context(session: &mut ChatSession, post_id: &str) {
    match session.registry().post(post_id).cloned() {
        Some(post) => {
            session.set_post_context(Some(&post));
            println!("Chat anchored to '{}'", post.title);
            println!("placeholder: {}", session.placeholder());
        }
        None => println!("No post with ID {post_id}"),
    }
}

async fn run_demo() -> anyhow::Result<()> {
    let (_config, mut services) = bootstrap().await?;
    let session = &mut services.session;

    println!("== seeded state ==");
    print_chats(session);
    print_posts(session);

    println!("\n== sending into the focused conversation ==");
    session.set_post_context(None);
    send_message(session, "Hi there");
    if let Some(active) = session.resolve_active() {
        print_thread(session, active);
    }

    println!("\n== registering interest twice ==");
    register_interest(session, "p2");
    register_interest(session, "p2");

    println!("\n== placeholder modes ==");
    println!("ambient: {}", session.placeholder());
    attach_context(session, "p1");
    session.set_post_context(None);
    tokio::time::sleep(std::time::Duration::from_millis(3_500)).await;
    println!("ambient again: {}", session.placeholder());

    session.close_chat();
    Ok(())
}
