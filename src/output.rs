use std::fmt;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::catalog::Store;

const KM_TO_MI: f64 = 0.621371;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Mi,
    Km,
}

impl Units {
    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            Self::Mi => km * KM_TO_MI,
            Self::Km => km,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mi => write!(f, "mi"),
            Self::Km => write!(f, "km"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Nearest<'a> {
    #[serde(flatten)]
    store: &'a Store,
    distance: f64,
    units: Units,
}

pub fn render(store: &Store, km: f64, units: Units, format: Format) -> Result<String> {
    let distance = units.from_km(km);
    match format {
        Format::Text => Ok(text(store, distance, units)),
        Format::Json => Ok(serde_json::to_string_pretty(&Nearest {
            store,
            distance,
            units,
        })?),
    }
}

fn text(store: &Store, distance: f64, units: Units) -> String {
    format!(
        "{}\n{}, {}, {} {}\n{distance:.2} {units} away",
        store.name, store.address, store.city, store.state, store.zip
    )
}
