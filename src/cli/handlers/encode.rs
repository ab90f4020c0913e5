use crate::cli::{
    args::EncodeArgs,
    config::{create_alphabet, open_input, open_output, read_input},
    global::GlobalArgs,
};
use radix64::{AlphabetRegistry, StreamingEncoder};
use std::fs;
use std::io::Write;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = create_alphabet(config, args.alphabet.as_deref())?;

    // Streaming mode never holds the whole input, so --max-size does not apply
    if args.stream {
        let mut reader = open_input(args.file.as_ref())?;
        let mut output = open_output(args.output.as_ref())?;
        let bytes = {
            let mut encoder = StreamingEncoder::new(&alphabet, &mut output);
            encoder.encode(&mut reader)?
        };
        if args.output.is_none() {
            writeln!(output)?;
        }
        output.flush()?;
        log::info!("encoded {} bytes", bytes);
        return Ok(());
    }

    let data = read_input(args.file.as_ref(), global)?;
    let encoded = radix64::encode_with(&data, &alphabet);
    log::info!("encoded {} bytes into {} characters", data.len(), encoded.len());

    if let Some(output_path) = &args.output {
        fs::write(output_path, encoded.as_bytes())?;
    } else {
        println!("{}", encoded);
    }

    Ok(())
}
