//! Generate command handler.

use anyhow::Context;
use csv_types::values_to_csv_line;
use synth_csv::{load_schema, CSVWriter, GenerateArgs};
use synth_generator::DataGenerator;

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let schema = load_schema(&args.schema)
        .with_context(|| format!("Failed to load schema table: {:?}", args.schema))?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Using seed {}", seed);

    let generator = DataGenerator::new(seed);

    if args.dry_run {
        generator
            .validate(&schema, args.columns.as_slice(), args.rows)
            .context("Schema validation failed")?;
        tracing::info!(
            "Dry run: schema and selection are valid ({} rows requested)",
            args.rows
        );
        return Ok(());
    }

    let table = generator
        .generate(&schema, args.columns.as_slice(), args.rows)
        .context("Failed to generate synthetic data")?;

    if args.preview > 0 {
        tracing::info!("Preview: {}", table.column_names().join(","));
        for row in table.rows().take(args.preview) {
            tracing::info!("Preview: {}", values_to_csv_line(row));
        }
    }

    let writer = CSVWriter::new().with_header(!args.no_header);
    match &args.output {
        Some(path) => {
            let metrics = writer
                .write_to_path(&table, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                "Wrote {} rows ({} bytes, {:.0} bytes/sec) to {}",
                metrics.rows_written,
                metrics.file_size_bytes,
                metrics.bytes_per_second(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            writer
                .write_table(&table, stdout.lock())
                .context("Failed to write CSV to stdout")?;
        }
    }

    Ok(())
}
