use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use mujam_config::Config;
use mujam_core::{Entry, Lexicon, StoreError, SubmitError};
use mujam_export::BackupWriter;
use mujam_lang_arabic::{ArabicNormalizer, BROWSE_LETTERS, letters};
use mujam_store::SqliteStore;
use tracing_subscriber::EnvFilter;

mod args;

use args::{Cli, Commands, ExportFormat};

type AppLexicon = Lexicon<ArabicNormalizer, SqliteStore>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::new();

    let store = SqliteStore::open(&config.storage.db_path).with_context(|| {
        format!(
            "could not open database at {}",
            config.storage.db_path.display()
        )
    })?;
    let mut lexicon = Lexicon::new(ArabicNormalizer, store);

    // startup-time bulk import; a missing artifact is a no-op
    if let Some(summary) = mujam_export::import_file(
        &config.export.import_path,
        &ArabicNormalizer,
        lexicon.store_mut(),
    )? {
        tracing::info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "startup bulk import finished"
        );
    }

    let backup = BackupWriter::new(&config.export.backup_path);

    match cli.command {
        Commands::Lookup { word } => handle_lookup(&lexicon, &word),
        Commands::Add {
            word,
            meaning,
            example,
            note,
        } => handle_add(&mut lexicon, &backup, &word, &meaning, &example, note.as_deref()),
        Commands::Browse { letter } => handle_browse(&lexicon, &letter),
        Commands::Letters => handle_letters(),
        Commands::Export { format, output } => handle_export(&lexicon, format, output),
        Commands::Import { file } => handle_import(&mut lexicon, &file),
    }
}

fn handle_lookup(lexicon: &AppLexicon, word: &str) -> anyhow::Result<()> {
    let found = lexicon.lookup(word)?;
    match found.entry {
        Some(entry) => print_entry(&entry),
        None => println!(
            "'{}' is not recorded yet. Add it with: mujam add '{}' --meaning .. --example ..",
            found.keyword, found.keyword
        ),
    }
    Ok(())
}

fn handle_add(
    lexicon: &mut AppLexicon,
    backup: &BackupWriter,
    word: &str,
    meaning: &str,
    example: &str,
    note: Option<&str>,
) -> anyhow::Result<()> {
    match lexicon.submit(word, meaning, example, note) {
        Ok(entry) => {
            backup.append(&entry)?;
            println!("Recorded '{}'.", entry.keyword);
            Ok(())
        }
        // already recorded is a recoverable outcome, not a failure
        Err(SubmitError::Store(StoreError::DuplicateKeyword(keyword))) => {
            println!("'{keyword}' is already recorded.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_browse(lexicon: &AppLexicon, letter: &str) -> anyhow::Result<()> {
    let Some(prefix) = letters::storage_prefix(letter) else {
        anyhow::bail!("'{letter}' is not a browsable Arabic letter; see `mujam letters`");
    };

    let entries = lexicon.browse(&prefix.to_string())?;
    if entries.is_empty() {
        println!("No words recorded under '{letter}'.");
        return Ok(());
    }

    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

fn handle_letters() -> anyhow::Result<()> {
    println!("{}", BROWSE_LETTERS.join(" "));
    Ok(())
}

fn handle_export(
    lexicon: &AppLexicon,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let entries = lexicon.entries()?;
    let document = match format {
        ExportFormat::Csv => mujam_export::to_csv(&entries),
        ExportFormat::Json => mujam_export::to_json(&entries)?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, document)
                .with_context(|| format!("could not write {}", path.display()))?;
            println!("Exported {} entries to {}.", entries.len(), path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

fn handle_import(lexicon: &mut AppLexicon, file: &Path) -> anyhow::Result<()> {
    let summary = mujam_export::import_file(file, &ArabicNormalizer, lexicon.store_mut())?
        .with_context(|| format!("{} does not exist", file.display()))?;

    println!(
        "Imported {} entries, skipped {}.",
        summary.imported, summary.skipped
    );
    Ok(())
}

fn print_entry(entry: &Entry) {
    match &entry.note {
        Some(note) => println!(
            "{}  |  {}  |  {}  |  {}",
            entry.keyword, entry.meaning, entry.example, note
        ),
        None => println!("{}  |  {}  |  {}", entry.keyword, entry.meaning, entry.example),
    }
}
