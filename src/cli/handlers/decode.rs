use crate::cli::{
    args::DecodeArgs,
    config::{create_alphabet, open_input, open_output, read_input},
    global::GlobalArgs,
};
use radix64::{AlphabetRegistry, DecodeMode, Decoder, StreamingDecoder};
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = create_alphabet(config, args.alphabet.as_deref())?;
    let mode = if args.strict || config.settings.strict() {
        DecodeMode::Strict
    } else {
        DecodeMode::Lenient
    };
    log::debug!("decoding in {:?} mode", mode);

    if args.stream {
        let mut reader = open_input(args.file.as_ref())?;
        let output = open_output(args.output.as_ref())?;
        let mut decoder = StreamingDecoder::new(&alphabet, output).mode(mode);
        let bytes = decoder.decode(&mut reader)?;
        decoder.into_inner().flush()?;
        log::info!("decoded {} bytes", bytes);
        return Ok(());
    }

    // Invalid UTF-8 surfaces as an invalid symbol rather than an I/O error
    let raw = read_input(args.file.as_ref(), global)?;
    let text = String::from_utf8_lossy(&raw);

    let data = Decoder::new(&alphabet).mode(mode).decode(text.trim())?;
    log::info!("decoded {} bytes", data.len());

    if let Some(output_path) = &args.output {
        fs::write(output_path, &data)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&data)?;
        stdout.flush()?;
    }

    Ok(())
}
