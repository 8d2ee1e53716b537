//! Describe command handler.

use anyhow::Context;
use synth_core::SchemaTable;
use synth_csv::{load_schema, DescribeArgs};

/// Render one line per column showing how its descriptor is interpreted.
///
/// Returns the report and the number of columns whose descriptor is invalid.
pub fn describe_schema(schema: &SchemaTable) -> (String, usize) {
    let mut report = String::new();
    let mut invalid = 0;

    for column in &schema.columns {
        let key = if column.primary_key { " [primary key]" } else { "" };
        let line = match column.column_type() {
            Ok(column_type) => format!(
                "{}: {} -> {}{}",
                column.name, column.type_descriptor, column_type, key
            ),
            Err(e) => {
                invalid += 1;
                format!("{}: {} -> error: {}", column.name, column.type_descriptor, e)
            }
        };
        report.push_str(&line);
        report.push('\n');
    }

    (report, invalid)
}

/// Run the describe command.
pub fn run_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let schema = load_schema(&args.schema)
        .with_context(|| format!("Failed to load schema table: {:?}", args.schema))?;

    let (report, invalid) = describe_schema(&schema);
    print!("{report}");

    if invalid > 0 {
        anyhow::bail!("{invalid} column(s) have invalid type descriptors");
    }
    Ok(())
}
