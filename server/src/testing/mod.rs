//! Shared fixtures for unit and end-to-end tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::dataset::{Dataset, EnvironmentalImpact, GdpRecord, GdpTable, MissionRecord};

/// A mission with placeholder values for every field but country and year.
pub fn mission(country: &str, year: i32) -> MissionRecord {
    MissionRecord {
        country: country.to_string(),
        year,
        budget: 1.0,
        duration: 10,
        mission_type: Some("Unmanned".to_string()),
        satellite_type: Some("Research".to_string()),
        technology_used: Some("AI Navigation".to_string()),
        environmental_impact: Some(EnvironmentalImpact::Low),
        success_rate: 50.0,
        collaborating_countries: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    country: &str,
    year: i32,
    budget: f64,
    duration: i64,
    kinds: [&str; 3],
    environmental_impact: EnvironmentalImpact,
    success_rate: f64,
    collaborating_countries: Option<&str>,
) -> MissionRecord {
    let [mission_type, satellite_type, technology_used] = kinds;
    MissionRecord {
        country: country.to_string(),
        year,
        budget,
        duration,
        mission_type: Some(mission_type.to_string()),
        satellite_type: Some(satellite_type.to_string()),
        technology_used: Some(technology_used.to_string()),
        environmental_impact: Some(environmental_impact),
        success_rate,
        collaborating_countries: collaborating_countries.map(str::to_string),
    }
}

/// Six missions across four countries and three years.
///
/// USA in 2000 has two missions (budgets 10 and 20, durations 100 and 200);
/// India in 2000 has one. Collaborator lists include a self-reference, blank
/// entries and padding.
pub fn sample_missions() -> Vec<MissionRecord> {
    use EnvironmentalImpact::{High, Low, Medium};

    vec![
        record(
            "USA",
            2000,
            10.0,
            100,
            ["Manned", "Research", "Nuclear Propulsion"],
            Low,
            80.0,
            Some("India, Japan"),
        ),
        record(
            "USA",
            2000,
            20.0,
            200,
            ["Manned", "Research", "Nuclear Propulsion"],
            High,
            90.0,
            Some("USA,  "),
        ),
        record(
            "India",
            2000,
            2.0,
            30,
            ["Unmanned", "Communication", "Solar Propulsion"],
            Medium,
            95.0,
            Some("USA"),
        ),
        record(
            "USA",
            2001,
            30.0,
            60,
            ["Unmanned", "Communication", "AI Navigation"],
            Medium,
            100.0,
            None,
        ),
        record(
            "Russia",
            2001,
            5.0,
            45,
            ["Manned", "Navigation", "Reusable Rocket"],
            High,
            70.0,
            Some(" China "),
        ),
        record(
            "China",
            2002,
            8.0,
            90,
            ["Unmanned", "Research", "AI Navigation"],
            Low,
            85.0,
            Some(""),
        ),
    ]
}

/// The sample missions without GDP.
pub fn sample_dataset() -> Dataset {
    Dataset::from_parts(sample_missions(), None)
}

/// The sample missions with GDP for USA (2000, 2001) and China (2002). India has none.
pub fn sample_dataset_with_gdp() -> Dataset {
    let gdp = GdpTable::from_records([
        ("USA", 2000, 10.25),
        ("USA", 2001, 10.5),
        ("China", 2002, 1.47),
    ]
    .map(|(country, year, gdp)| GdpRecord {
        country: country.to_string(),
        year,
        gdp,
    }));
    Dataset::from_parts(sample_missions(), Some(gdp))
}

/// Write `contents` to a temporary CSV file that is removed on drop.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
