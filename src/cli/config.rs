use radix64::{Alphabet, AlphabetNotFoundError, AlphabetRegistry, find_closest_alphabet};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::global::GlobalArgs;

/// Loads the registry from the standard locations plus `--config`, if given.
pub fn load_registry(global: &GlobalArgs) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let mut registry = AlphabetRegistry::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        let extra = AlphabetRegistry::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        log::debug!("loaded {} alphabet(s) from {}", extra.alphabets.len(), path);
        registry.merge(extra);
    }

    Ok(registry)
}

/// Helper function to create an alphabet from config
pub fn create_alphabet(
    config: &AlphabetRegistry,
    name: Option<&str>,
) -> Result<Alphabet, Box<dyn std::error::Error>> {
    let name = name.unwrap_or_else(|| config.settings.default_alphabet());

    let alphabet_config = config.get_alphabet(name).ok_or_else(|| {
        // Try to find a close match
        let suggestion = find_closest_alphabet(name, &config.names());
        AlphabetNotFoundError::new(name, suggestion)
    })?;

    alphabet_config
        .build()
        .map_err(|e| format!("Invalid alphabet '{}': {}", name, e).into())
}

/// Reads the whole input, enforcing --max-size unless --force is given.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        check_file_size(file_path, global)?;
        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    // Check stdin size after reading
    if global.max_size > 0 && buffer.len() > global.max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force with a file argument for large inputs.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

fn check_file_size(path: &Path, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 {
        return Ok(());
    }

    let file_size = fs::metadata(path)?.len() as usize;
    if file_size <= global.max_size {
        return Ok(());
    }

    if global.force {
        log::warn!(
            "processing large file ({} bytes, limit: {} bytes)",
            file_size,
            global.max_size
        );
        Ok(())
    } else {
        Err(format!(
            "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            file_size, global.max_size
        )
        .into())
    }
}

/// Opens the input for streaming: the file if given, stdin otherwise.
pub fn open_input(file: Option<&PathBuf>) -> Result<Box<dyn Read>, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(Box::new(fs::File::open(path)?)),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Opens the output for streaming: the file if given, stdout otherwise.
pub fn open_output(
    output: Option<&PathBuf>,
) -> Result<Box<dyn io::Write>, Box<dyn std::error::Error>> {
    match output {
        Some(path) => Ok(Box::new(io::BufWriter::new(fs::File::create(path)?))),
        None => Ok(Box::new(io::BufWriter::new(io::stdout().lock()))),
    }
}
