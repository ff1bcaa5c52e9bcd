//! End-to-end tests for the FDI trend pipeline.

use std::fs;
use std::path::Path;

use econ_stats::fdi::{self, FdiConfig};

/// One matching Outward row with 14 non-zero yearly values whose growth
/// rates shift sharply between the two halves.
fn write_single_pair_csv(path: &Path) {
    let header = {
        let years: Vec<String> = (2009..=2022).map(|y| y.to_string()).collect();
        format!(
            "Country Name,Counterpart Country Name,Indicator Name,{}",
            years.join(",")
        )
    };
    // Flat first half, ~50% growth per year in the second half.
    let values = "100,102,101,103,102,104,103,150,225,340,500,760,1150,1700";
    let rows = [
        format!("Aland,Borland,Outward Direct Investment Positions,{values}"),
        // Row for a different counterpart; must not leak into the analysis.
        "Aland,Corland,Outward Direct Investment Positions,1,1,1,1,1,1,1,1,1,1,1,1,1,1"
            .to_string(),
    ];
    fs::write(path, format!("{header}\n{}\n", rows.join("\n"))).unwrap();
}

fn config_for(csv: &Path, out: &Path) -> FdiConfig {
    let mut config = FdiConfig::new(csv, out);
    config.pairs = vec![("Aland".to_string(), "Borland".to_string())];
    config
}

fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn single_pair_emits_one_chart_and_one_p_value_line() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = tmp.path().join("cdis.csv");
    let out = tmp.path().join("results");
    write_single_pair_csv(&csv);

    let summary = fdi::run(&config_for(&csv, &out)).unwrap();

    // Outward has data, Inward has no matching rows.
    assert_eq!(summary.analyzed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.tested, 1);

    assert_eq!(png_files(&out), vec!["Outward_Aland_Borland.png".to_string()]);

    let log = fs::read_to_string(out.join("result.txt")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Outward Investment Aland -> Borland: p-value = "));

    let p: f64 = lines[0].rsplit(' ').next().unwrap().parse().unwrap();
    assert!((0.0..=1.0).contains(&p));
    // The halves are clearly separated, so the shift should be detected.
    assert!(p < 0.05, "p = {p}");
}

#[test]
fn pair_without_data_is_skipped_entirely() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = tmp.path().join("cdis.csv");
    let out = tmp.path().join("results");
    write_single_pair_csv(&csv);

    let mut config = FdiConfig::new(&csv, &out);
    config.pairs = vec![("Nowhere".to_string(), "Borland".to_string())];
    let summary = fdi::run(&config).unwrap();

    assert_eq!(summary.analyzed, 0);
    assert_eq!(summary.skipped, 2);
    assert!(png_files(&out).is_empty());
    assert_eq!(fs::read_to_string(out.join("result.txt")).unwrap(), "");
}

#[test]
fn short_series_yields_chart_but_no_test() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = tmp.path().join("cdis.csv");
    let out = tmp.path().join("results");

    // Three usable values give two growth rates: one per half, below the
    // more-than-one-observation gate.
    let header = "Country Name,Counterpart Country Name,Indicator Name,2009,2010,2011";
    let row = "Aland,Borland,Outward Direct Investment Positions,100,110,121";
    fs::write(&csv, format!("{header}\n{row}\n")).unwrap();

    let mut config = FdiConfig::new(&csv, &out);
    config.pairs = vec![("Aland".to_string(), "Borland".to_string())];
    config.years = vec![2009, 2010, 2011];
    let summary = fdi::run(&config).unwrap();

    assert_eq!(summary.analyzed, 1);
    assert_eq!(summary.tested, 0);
    assert_eq!(png_files(&out).len(), 1);
    assert_eq!(fs::read_to_string(out.join("result.txt")).unwrap(), "");
}

#[test]
fn missing_csv_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for(
        &tmp.path().join("does_not_exist.csv"),
        &tmp.path().join("results"),
    );
    assert!(fdi::run(&config).is_err());
}
