//! Schema table CSV -> generator -> CSV export.

use chrono::NaiveDate;
use synth_csv::{read_schema_table, CSVWriter};
use synth_generator::DataGenerator;

const SCHEMA: &str = "\
names,type,values,primary_key
order_id,varchar(12),ORD,True
customer,varchar(30),,False
amount,decimal(4,2),,False
quantity,int(2),,False
ordered_on,date,2023-01-01,False
channel,category,\"web,store,phone\",False
gift,boolean,,False
";

fn generator() -> DataGenerator {
    let now = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    DataGenerator::new(7).with_reference_time(now)
}

#[test]
fn test_generated_csv_has_header_and_rows() {
    let schema = read_schema_table(SCHEMA.as_bytes()).unwrap();
    let table = generator()
        .generate(&schema, &["order_id", "amount", "channel"], 20)
        .unwrap();

    let mut buffer = Vec::new();
    let rows = CSVWriter::new().write_table(&table, &mut buffer).unwrap();
    assert_eq!(rows, 20);

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, vec!["order_id", "amount", "channel"]);

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 20);

    for (i, record) in records.iter().enumerate() {
        // Primary key: truncated seed + counter
        assert_eq!(&record[0], format!("ORD{}", i + 1));

        let amount: f64 = record[1].parse().unwrap();
        assert!((1.0..10_000.0).contains(&amount));
        let fraction_digits = record[1].split('.').nth(1).map_or(0, str::len);
        assert!(fraction_digits <= 2);

        assert!(["web", "store", "phone"].contains(&&record[2]));
    }
}

#[test]
fn test_every_family_renders() {
    let schema = read_schema_table(SCHEMA.as_bytes()).unwrap();
    let table = generator().generate::<&str>(&schema, &[], 10).unwrap();

    let mut buffer = Vec::new();
    CSVWriter::new().write_table(&table, &mut buffer).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    for record in reader.records() {
        let record = record.unwrap();
        assert_eq!(record.len(), 7);

        assert!(record[1].chars().count() <= 30);

        let quantity: i64 = record[3].parse().unwrap();
        assert!((10..=99).contains(&quantity));

        let ordered_on = NaiveDate::parse_from_str(&record[4], "%Y-%m-%d").unwrap();
        assert!(ordered_on >= NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(ordered_on <= NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert!(&record[6] == "true" || &record[6] == "false");
    }
}
