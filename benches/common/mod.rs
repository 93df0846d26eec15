use data_explorer::ingestion::{load_csv_from_reader, LoadOptions};
use data_explorer::types::DataSet;

/// Synthetic CSV with numeric, integer, categorical and boolean columns; roughly one cell in
/// seven is missing.
pub fn generate_csv(rows: usize) -> String {
    let cities = ["Leeds", "York", "Hull", "Bath"];
    let mut data = String::from("id,age,income,city,member\n");
    for row in 0..rows {
        let age = if row % 7 == 3 { String::new() } else { (20 + row % 50).to_string() };
        let income = if row % 7 == 5 {
            String::new()
        } else {
            format!("{:.2}", 30_000.0 + (row % 97) as f64 * 311.5)
        };
        let city = if row % 11 == 0 { "" } else { cities[row % cities.len()] };
        data.push_str(&format!("{row},{age},{income},{city},{}\n", row % 3 == 0));
    }
    data
}

pub fn dataset(rows: usize) -> DataSet {
    let data = generate_csv(rows);
    let mut rdr = csv::ReaderBuilder::new().from_reader(data.as_bytes());
    load_csv_from_reader(&mut rdr, &LoadOptions::default()).unwrap()
}
