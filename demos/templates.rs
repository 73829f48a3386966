use ezprompt::{PromptLibrary, PromptTemplate, Result};
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

    // Example 1: Ad-hoc template
    println!("\n=== Example 1: Ad-hoc Template ===\n");
    let template = PromptTemplate::new(
        "Translate the following text from {source_lang} to {target_lang}:\n\n{text}\n\nTranslation:",
    );

    let prompt = template.format(&[
        ("source_lang", "English"),
        ("target_lang", "Chinese"),
        ("text", "Hello, how are you?"),
    ])?;
    println!("{}\n", prompt);

    // Example 2: Builtin template library
    println!("\n=== Example 2: Builtin Template Library ===\n");
    println!("Available templates: {:?}\n", PromptLibrary::names());

    let qa = PromptLibrary::question_answer();
    println!("{}\n", qa.format(&[("question", "What is machine learning?")])?);

    let code = PromptLibrary::code_generation();
    println!(
        "{}\n",
        code.format(&[("language", "Rust"), ("task", "Implement quicksort")])?
    );

    // Example 3: Variable introspection and validation
    println!("\n=== Example 3: Validation and Defaults ===\n");
    let template = PromptTemplate::new("你好 {name}，今天{weather}");

    println!("Variables: {:?}", template.get_variables());
    println!("validate(name only): {}", template.validate(&[("name", "张三")]));
    println!(
        "validate(name and weather): {}",
        template.validate(&[("name", "张三"), ("weather", "晴朗")])
    );

    let with_defaults = PromptTemplate::new("你好 {name}，今天{weather}")
        .with_default("name", "用户")
        .with_default("weather", "晴朗");

    println!("With defaults: {}", with_defaults.format(&[])?);
    println!("Override default: {}", with_defaults.format(&[("name", "李四")])?);

    Ok(())
}
