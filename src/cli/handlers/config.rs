use crate::cli::args::ConfigAction;
use radix64::{AlphabetConfig, AlphabetNotFoundError, AlphabetRegistry, find_closest_alphabet};

pub fn handle(
    action: ConfigAction,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, config),
        ConfigAction::Show { alphabet } => handle_show(&alphabet, config),
    }
}

fn handle_list(json: bool, config: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = config.names();

    if json {
        let alphabets: Vec<_> = names
            .iter()
            .filter_map(|name| config.get_alphabet(name).map(|entry| (name, entry)))
            .map(|(name, entry)| {
                serde_json::json!({
                    "name": name,
                    "padding": entry.padding,
                    "description": entry.description,
                    "valid": entry.build().is_ok(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "alphabets": alphabets,
            "default_alphabet": config.settings.default_alphabet(),
            "strict": config.settings.strict(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available alphabets:\n");
    let default = config.settings.default_alphabet();
    for name in &names {
        let Some(entry) = config.get_alphabet(name) else {
            continue;
        };
        let marker = if name == default { "*" } else { " " };
        println!(
            "{} {:<15} {}  {}",
            marker,
            name,
            preview(entry),
            entry.description.as_deref().unwrap_or("")
        );
    }
    println!("\n* default alphabet");

    Ok(())
}

fn handle_show(name: &str, config: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let entry = config.get_alphabet(name).ok_or_else(|| {
        let suggestion = find_closest_alphabet(name, &config.names());
        AlphabetNotFoundError::new(name, suggestion)
    })?;

    println!("Alphabet: {}", name);
    println!("  Characters: {}", entry.chars);
    println!("  Size: {} characters", entry.chars.chars().count());
    println!("  Padding: {}", entry.padding);
    if let Some(description) = &entry.description {
        println!("  Description: {}", description);
    }
    match entry.build() {
        Ok(_) => println!("  Valid: yes"),
        Err(e) => println!("  Valid: no ({})", e),
    }
    if name == config.settings.default_alphabet() {
        println!("  Default: yes");
    }

    Ok(())
}

fn preview(entry: &AlphabetConfig) -> String {
    let head: String = entry.chars.chars().take(20).collect();
    if entry.chars.chars().count() > 20 {
        format!("{}...", head)
    } else {
        head
    }
}
