use std::path::Path;

use crate::error::Result;
use crate::report::fill::FillReport;

/// Write per-day fill statistics to a CSV file.
pub fn write_csv(report: &FillReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day",
        "requested",
        "mean_combos",
        "min_combos",
        "max_combos",
        "full_days",
        "empty_days",
        "fill_rate",
    ])?;

    for day in &report.per_day {
        wtr.write_record([
            day.day.clone(),
            day.requested.to_string(),
            format!("{:.2}", day.mean_combos),
            day.min_combos.to_string(),
            day.max_combos.to_string(),
            day.full_days.to_string(),
            day.empty_days.to_string(),
            format!("{:.3}", day.fill_rate()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print the report summary to stdout.
pub fn print_report(report: &FillReport) {
    println!("\n=== Fill Rate over {} trials ===\n", report.trials);

    for day in &report.per_day {
        println!(
            "{:<18} mean {:.2}/{}  min {}  max {}  full {:>4}  empty {:>4}",
            day.day,
            day.mean_combos,
            day.requested,
            day.min_combos,
            day.max_combos,
            day.full_days,
            day.empty_days
        );
    }

    println!();
    println!("Overall fill rate: {:.1}%", report.overall_fill_rate * 100.0);
    println!("Distinct combos seen: {}", report.distinct_combos);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fill::DayFillStats;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_csv() {
        let report = FillReport {
            trials: 10,
            per_day: vec![DayFillStats {
                day: "Monday".to_string(),
                requested: 3,
                mean_combos: 1.5,
                min_combos: 0,
                max_combos: 3,
                full_days: 4,
                empty_days: 2,
            }],
            overall_fill_rate: 0.5,
            distinct_combos: 7,
        };

        let file = NamedTempFile::new().unwrap();
        write_csv(&report, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "1.50");
        assert_eq!(&rows[0][7], "0.500");
    }
}
