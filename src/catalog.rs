use std::{collections::BTreeMap, fs::read_to_string, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::geo::Coordinate;

#[derive(Debug, Serialize)]
pub struct Store {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Catalog columns beyond the required ones, passed through verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Store {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

pub fn load(path: &Path) -> Result<Vec<Store>> {
    let text = read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    parse(&text).with_context(|| format!("failed to parse catalog {}", path.display()))
}

fn parse(text: &str) -> Result<Vec<Store>> {
    // some catalog exports lead with a byte-order mark
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let columns = Columns::locate(reader.headers()?)?;

    let mut stores = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let store = columns
            .store(&record)
            .with_context(|| format!("catalog row {}", i + 2))?;
        stores.push(store);
    }

    Ok(stores)
}

struct Columns {
    name: usize,
    address: usize,
    city: usize,
    state: usize,
    zip: usize,
    latitude: usize,
    longitude: usize,
    extra: Vec<(usize, String)>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Columns> {
        let name = column(headers, &["Name", "Store Name"])?;
        let address = column(headers, &["Address"])?;
        let city = column(headers, &["City"])?;
        let state = column(headers, &["State"])?;
        let zip = column(headers, &["Zip", "Zip Code"])?;
        let latitude = column(headers, &["Latitude"])?;
        let longitude = column(headers, &["Longitude"])?;

        let claimed = [name, address, city, state, zip, latitude, longitude];
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !claimed.contains(i))
            .map(|(i, header)| (i, header.trim().to_string()))
            .collect();

        Ok(Columns {
            name,
            address,
            city,
            state,
            zip,
            latitude,
            longitude,
            extra,
        })
    }

    fn store(&self, record: &csv::StringRecord) -> Result<Store> {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        let coordinate = |i: usize| -> Result<f64> {
            let raw = record.get(i).unwrap_or_default();
            raw.trim()
                .parse()
                .with_context(|| format!("invalid coordinate {raw:?}"))
        };

        Ok(Store {
            name: field(self.name),
            address: field(self.address),
            city: field(self.city),
            state: field(self.state),
            zip: field(self.zip),
            latitude: coordinate(self.latitude)?,
            longitude: coordinate(self.longitude)?,
            extra: self
                .extra
                .iter()
                .map(|(i, header)| (header.clone(), field(*i)))
                .collect(),
        })
    }
}

fn column(headers: &csv::StringRecord, aliases: &[&str]) -> Result<usize> {
    headers
        .iter()
        .position(|header| {
            aliases
                .iter()
                .any(|alias| header.trim().eq_ignore_ascii_case(alias))
        })
        .with_context(|| format!("catalog is missing a {} column", aliases[0]))
}
