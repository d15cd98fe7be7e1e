//! A tour of the `promptkit` surface: message building, chaining, templates,
//! defaults, the catalog, validation and the three output shapes.

use anyhow::Result;
use promptkit::builder::MessageBuilder;
use promptkit::catalog;
use promptkit::template::Template;
use promptkit::utils::JsonMap;
use serde_json::json;

fn vars(entries: &[(&str, serde_json::Value)]) -> JsonMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn basic_builder() -> Result<()> {
    banner("Basic MessageBuilder usage");
    let mut builder = MessageBuilder::new();
    builder
        .add_system("You are a helpful assistant.")
        .add_user("What is Rust?");

    println!("\nMessages format:");
    for message in builder.build("messages")?.into_messages().unwrap() {
        println!("  [{}] {}", message.role, message.content);
    }

    println!("\nString format:");
    println!("{}\n", builder.build("string")?.into_text().unwrap());
    Ok(())
}

fn method_chaining() -> Result<()> {
    banner("Method chaining");
    let mut builder = MessageBuilder::new();
    builder
        .add_system("You are a Rust expert.")
        .add_user("How do I sort a Vec?")
        .add_assistant("Use the sort() or sort_unstable() methods.")
        .add_user("What is the difference?");

    println!("\nBuilt conversation ({} messages):", builder.len());
    println!("{}\n", builder);
    Ok(())
}

fn basic_template() -> Result<()> {
    banner("Basic Template usage");
    let template = Template::new("Hello {name}, you have {count} messages.");
    println!("\nRaw template: {}", template);
    println!("Variables: {:?}", template.get_variables());
    let prompt = template.format(&vars(&[("name", json!("User")), ("count", json!(5))]))?;
    println!("Formatted: {}\n", prompt);
    Ok(())
}

fn template_defaults() -> Result<()> {
    banner("Template defaults and overrides");
    let template = Template::with_defaults(
        "{greeting}, {name}!",
        vars(&[("greeting", json!("Hello")), ("name", json!("World"))]),
    );
    println!("\nWith defaults only: {}", template.format(&JsonMap::new())?);
    println!(
        "With an override:   {}\n",
        template.format(&vars(&[("name", json!("Alice"))]))?
    );
    Ok(())
}

fn catalog_templates() -> Result<()> {
    banner("Template catalog");
    let translation = catalog::translation();
    let prompt = translation.format(&vars(&[
        ("source_lang", json!("English")),
        ("target_lang", json!("French")),
        ("text", json!("Good morning!")),
    ]))?;
    println!("\n{}\n", prompt);

    let qa = catalog::question_answer();
    println!(
        "{}\n",
        qa.format(&vars(&[("question", json!("What is ownership?"))]))?
    );
    Ok(())
}

fn validation_and_chat_shape() -> Result<()> {
    banner("Validation and the chat shape");
    let template = catalog::code_generation();
    let incomplete = vars(&[("language", json!("Rust"))]);
    println!("\nCovered with language only? {}", template.validate(&incomplete));
    let complete = vars(&[("language", json!("Rust")), ("task", json!("read a file"))]);
    println!("Covered with both?          {}", template.validate(&complete));

    let mut builder = MessageBuilder::new();
    builder
        .add_system("You are a coding assistant.")
        .add_user(template.format(&complete)?);
    builder.set_context("audience", "example");
    let chat = builder.build("chat")?.into_chat().unwrap();
    println!("\nChat payload:\n{}\n", serde_json::to_string_pretty(&chat)?);
    Ok(())
}

fn main() -> Result<()> {
    basic_builder()?;
    method_chaining()?;
    basic_template()?;
    template_defaults()?;
    catalog_templates()?;
    validation_and_chat_shape()?;
    Ok(())
}
