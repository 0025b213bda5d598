use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::decimal::Money;
use crate::errors::{Result, SimulationError};
use crate::transaction::{sort_chronologically, Transaction};
use crate::types::Category;

/// Reads `date,category,amount` records, one per line, without a header.
///
/// Blank lines and lines starting with `#` are skipped. Categories are
/// matched case-insensitively and unknown labels load as `Other`. Amounts may
/// carry a `$` sign, and thousands separators when the amount is quoted.
/// Extra non-empty fields are rejected. The first malformed record
/// aborts the load. The returned list is in date order, ties in file order.
pub fn load_from_reader(reader: impl Read) -> Result<Vec<Transaction>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut transactions = Vec::new();
    for result in csv.records() {
        let record = result.map_err(from_csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        transactions.push(parse_record(&record, line)?);
    }

    sort_chronologically(&mut transactions);
    Ok(transactions)
}

pub fn load_from_path(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    let transactions = load_from_reader(file)?;
    log::info!("loaded {} transactions from {}", transactions.len(), path.display());
    Ok(transactions)
}

pub fn load_from_str(data: &str) -> Result<Vec<Transaction>> {
    load_from_reader(data.as_bytes())
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Transaction> {
    let malformed = |message: String| SimulationError::Parse { line, message };

    if record.len() < 3 {
        return Err(malformed(format!(
            "expected date,category,amount but found {} field(s)",
            record.len()
        )));
    }

    if record.iter().skip(3).any(|field| !field.is_empty()) {
        return Err(malformed(format!(
            "expected date,category,amount but found {} fields; quote amounts containing ','",
            record.len()
        )));
    }

    let date = NaiveDate::parse_from_str(&record[0], "%Y-%m-%d")
        .map_err(|e| malformed(format!("invalid date '{}': {}", &record[0], e)))?;
    let category = Category::parse(&record[1]);
    let amount = parse_amount(&record[2])
        .ok_or_else(|| malformed(format!("invalid amount '{}'", &record[2])))?;

    Transaction::new(date, category, amount).map_err(|e| malformed(e.to_string()))
}

/// strips currency symbols and thousands separators
fn parse_amount(raw: &str) -> Option<Money> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

fn from_csv_error(e: csv::Error) -> SimulationError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io) => SimulationError::Io(io),
        _ => SimulationError::Parse { line, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_load_records() {
        let data = "2025-01-15,Groceries,600\n2025-01-15,Gas,100\n2025-02-15,Other,300\n";
        let transactions = load_from_str(data).unwrap();

        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].date(), date(2025, 1, 15));
        assert_eq!(transactions[0].category(), Category::Groceries);
        assert_eq!(transactions[1].category(), Category::Gas);
        assert_eq!(transactions[2].amount(), Money::from_major(300));
    }

    #[test]
    fn test_currency_symbols_and_separators() {
        let data = "2025-01-15,Other,$45.10\n2025-01-16,Other,\"$1,234.50\"\n";
        let transactions = load_from_str(data).unwrap();

        assert_eq!(transactions[0].amount(), Money::from_decimal(dec!(45.10)));
        assert_eq!(transactions[1].amount(), Money::from_decimal(dec!(1234.50)));
    }

    #[test]
    fn test_unknown_category_loads_as_other() {
        let transactions = load_from_str("2025-01-15,Unicorn,25").unwrap();
        assert_eq!(transactions[0].category(), Category::Other);

        let transactions = load_from_str("2025-01-15,  gRoCeRiEs ,25").unwrap();
        assert_eq!(transactions[0].category(), Category::Groceries);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let data = "# statement export\n\n2025-03-01,Gas,40.00\n\n# trailing note\n";
        let transactions = load_from_str(data).unwrap();
        assert_eq!(transactions.len(), 1);
    }

    #[test]
    fn test_result_sorted_stably() {
        let data = "2025-02-01,Gas,1\n2025-01-05,Other,2\n2025-02-01,Groceries,3\n";
        let transactions = load_from_str(data).unwrap();

        let amounts: Vec<_> = transactions.iter().map(|t| t.amount()).collect();
        assert_eq!(
            amounts,
            vec![Money::from_major(2), Money::from_major(1), Money::from_major(3)]
        );
    }

    #[test]
    fn test_bad_date_reports_line() {
        let err = load_from_str("2025-01-15,Gas,10\n20XX-99-99,Groceries,50\n").unwrap_err();
        match err {
            SimulationError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("20XX-99-99"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_record_rejected() {
        let err = load_from_str("2025-01-15,Gas\n").unwrap_err();
        assert!(matches!(err, SimulationError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_extra_fields_rejected() {
        // an unquoted thousands separator splits the amount across fields
        let err = load_from_str("2024-01-15,Other,$1,234.50\n").unwrap_err();
        assert!(matches!(err, SimulationError::Parse { line: 1, .. }));

        let err = load_from_str("2024-01-15,Gas,10\n# note\n\n2024-01-16,Gas,5,extra\n").unwrap_err();
        assert!(matches!(err, SimulationError::Parse { line: 4, .. }));

        // trailing empty fields are tolerated
        let transactions = load_from_str("2024-01-15,Gas,10,\n").unwrap();
        assert_eq!(transactions[0].amount(), Money::from_major(10));
    }

    #[test]
    fn test_bad_amount_rejected() {
        let err = load_from_str("2025-01-15,Gas,ten dollars\n").unwrap_err();
        assert!(matches!(err, SimulationError::Parse { line: 1, .. }));

        let err = load_from_str("2025-01-15,Gas,-10\n").unwrap_err();
        assert!(matches!(err, SimulationError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_path(Path::new("nonexistent_file_zzzz999.csv")).unwrap_err();
        assert!(matches!(err, SimulationError::Io(_)));
    }
}
