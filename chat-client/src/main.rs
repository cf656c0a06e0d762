use chat_client::format::terminal::to_terminal;
use chat_client::{ChatSession, ClientConfig, Message, RelayClient, Sender};
use colored::Colorize;
use service_core::observability::init_tracing;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands: /clear to reset the chat, /history to redraw it, /quit to exit.";

fn print_message(message: &Message) {
    let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M");
    match message.sender {
        Sender::User => println!(
            "{} {}",
            format!("[{}] You:", time).green().bold(),
            message.text
        ),
        Sender::Ai => println!(
            "{}\n{}",
            format!("[{}] AI:", time).blue().bold(),
            to_terminal(&message.text)
        ),
    }
}

fn prompt() -> std::io::Result<()> {
    print!("{} ", ">".bold());
    std::io::stdout().flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("chat-client", "warn");

    let config = ClientConfig::from_env()?;
    let client = RelayClient::new(&config)?;
    let mut session = ChatSession::new();

    println!("{} ({})", "AI Chat".bold(), client.base_url());
    if !client.health().await {
        println!(
            "{}",
            "Chat server is not reachable yet; messages will fail until it starts.".yellow()
        );
    }
    println!("{}", HELP.dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{}", HELP.dimmed());
                continue;
            }
            "/clear" => {
                session.clear();
                println!("{}", "Chat cleared.".dimmed());
                continue;
            }
            "/history" => {
                session.messages().iter().for_each(print_message);
                continue;
            }
            _ => {}
        }

        let text = match session.submit(&line) {
            Ok(text) => text,
            Err(e) => {
                println!("{}", e.to_string().yellow());
                continue;
            }
        };

        println!("{}", "AI is thinking...".dimmed().italic());
        let outcome = client.send(&text).await;
        let reply = session.complete(outcome);
        print_message(reply);

        if let Some(banner) = session.banner() {
            println!("{}", format!("! {}", banner).red());
        }
    }

    Ok(())
}
