use ezprompt::{PromptBuilder, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::DEBUG.into())
                .from_env_lossy(),
        )
        .event_format(
            tracing_subscriber::fmt::format::format()
                .compact()
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
                    "%H:%M:%S.%3f".to_owned(),
                )),
        )
        .init();

    // Example 1: Basic builder usage
    println!("\n=== Example 1: Basic Builder Usage ===\n");
    let mut builder = PromptBuilder::new();
    builder.add_system("You are a helpful AI assistant.");
    builder.add_user("What is Rust?");

    println!("Messages format:");
    let prompt = builder.build("messages")?;
    for message in prompt.as_messages().unwrap() {
        println!("  {}: {}", message.role, message.content);
    }

    println!("\nString format:");
    println!("{}", builder.build("string")?.as_text().unwrap());

    // Example 2: Method chaining
    println!("\n=== Example 2: Method Chaining ===\n");
    let mut builder = PromptBuilder::new();
    builder
        .add_system("You are a Rust expert.")
        .add_user("How do I sort a Vec?")
        .add_assistant("Use the sort() or sort_unstable() methods.")
        .add_user("What is the difference?");

    println!("{}", builder);

    // Example 3: Chat payload with caller-side context
    println!("\n=== Example 3: Chat Payload ===\n");
    builder.set_context("session", "demo");

    let prompt = builder.build("chat")?;
    let json = serde_json::to_string_pretty(prompt.as_chat().unwrap()).unwrap();
    println!("{}", json);

    Ok(())
}
