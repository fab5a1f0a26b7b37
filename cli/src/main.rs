//! Command-line decoder for track records.

mod cli;

use std::{
    fs::File,
    io::{self, BufReader, Write},
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trackwire::track::{self, Encoded, TrackRecord, Version};

use cli::{Args, Command};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Decode {
            payloads,
            file,
            requester,
            json,
        } => decode(payloads, file, requester, json),
        Command::Encode {
            version,
            title,
            author,
            length,
            identifier,
            stream,
            uri,
            thumbnail,
            isrc,
            source,
        } => {
            let version = Version::try_from(version)?;

            let record = TrackRecord {
                track_id: Encoded::Bytes(Vec::new()),
                title,
                author,
                length,
                identifier,
                is_stream: stream,
                uri,
                thumbnail,
                isrc,
                source,
                position: 0,
                requester: None,
            };

            let text = track::encode_base64(&record, version)?;
            tracing::debug!("Encoded {} in version {}", record.identifier, version);
            println!("{text}");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn decode(
    payloads: Vec<String>,
    file: Option<std::path::PathBuf>,
    requester: Option<u64>,
    json: bool,
) -> Result<()> {
    if payloads.is_empty() && file.is_none() {
        Err(anyhow!("Nothing to decode: pass base64 payloads or --file"))?;
    }

    let mut out = io::stdout().lock();
    let failures = decode_payloads(&payloads, requester, json, &mut out)?;

    if let Some(path) = file {
        let mut reader = BufReader::new(
            File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?,
        );

        let record = track::decode_reader(&mut reader)
            .with_context(|| format!("Failed to decode {}", path.display()))?;

        let record = match requester {
            Some(requester) => record.with_requester(requester),
            None => record,
        };

        print_record(&record, json, &mut out)?;
    }

    check_failures(failures)
}

/// Decode and print each payload, returning how many failed.
fn decode_payloads(
    payloads: &[String],
    requester: Option<u64>,
    json: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let mut failures = 0;

    for payload in payloads {
        tracing::trace!("Decoding payload of {} characters", payload.len());

        match track::decode_with_requester(payload.as_str(), requester) {
            Ok(record) => print_record(&record, json, out)?,
            Err(e) => {
                tracing::error!("Failed to decode {}: {}", payload, e);
                failures += 1;
            }
        }
    }

    Ok(failures)
}

/// Turn a failure count into the process outcome; any failure exits non-zero.
fn check_failures(failures: usize) -> Result<()> {
    if failures > 0 {
        Err(anyhow!("{failures} payload(s) failed to decode"))?;
    }

    Ok(())
}

fn print_record(record: &TrackRecord, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(record)?)?;
        return Ok(());
    }

    writeln!(out, "title:      {}", record.title)?;
    writeln!(out, "author:     {}", record.author)?;
    writeln!(out, "length:     {} ms", record.length)?;
    writeln!(out, "identifier: {}", record.identifier)?;
    writeln!(out, "stream:     {}", record.is_stream)?;
    writeln!(out, "uri:        {}", record.uri.as_deref().unwrap_or("-"))?;
    writeln!(out, "thumbnail:  {}", record.thumbnail.as_deref().unwrap_or("-"))?;
    writeln!(out, "isrc:       {}", record.isrc.as_deref().unwrap_or("-"))?;
    writeln!(out, "source:     {}", record.source)?;

    if let Some(requester) = record.requester {
        writeln!(out, "requester:  {requester}")?;
    }

    writeln!(out)?;
    Ok(())
}
