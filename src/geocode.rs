use std::fmt;

use serde::Deserialize;
use ureq::Agent;

use crate::geo::Coordinate;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

#[derive(Debug)]
pub enum Location {
    Address(String),
    Zip(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(x) => write!(f, "address {x:?}"),
            Self::Zip(x) => write!(f, "zip {x:?}"),
        }
    }
}

/// One row of a search response. Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Resolves a location to a coordinate with a single blocking lookup.
/// Every provider failure reads as "not found"; there are no retries.
pub fn resolve(agent: &Agent, location: &Location) -> Option<Coordinate> {
    let request = agent
        .get(SEARCH_URL)
        .query("format", "json")
        .query("limit", "1");
    let request = match location {
        Location::Address(x) => request.query("q", x),
        Location::Zip(x) => request.query("postalcode", x),
    };

    let places: Vec<Place> = request.call().ok()?.into_json().ok()?;
    first_coordinate(places)
}

fn first_coordinate(places: Vec<Place>) -> Option<Coordinate> {
    let place = places.into_iter().next()?;
    Some(Coordinate {
        lat: place.lat.parse().ok()?,
        lng: place.lon.parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response() {
        let places: Vec<Place> = serde_json::from_str(
            r#"[{"place_id":89236389,"lat":"37.3317585","lon":"-122.0320474","display_name":"Apple Campus, Cupertino"}]"#,
        )
        .unwrap();

        let coordinate = first_coordinate(places).unwrap();
        assert_eq!(coordinate.lat, 37.3317585);
        assert_eq!(coordinate.lng, -122.0320474);
    }

    #[test]
    fn empty_response_is_not_found() {
        let places: Vec<Place> = serde_json::from_str("[]").unwrap();
        assert!(first_coordinate(places).is_none());
    }

    #[test]
    fn unparseable_coordinate_is_not_found() {
        let places = vec![Place {
            lat: "north".to_string(),
            lon: "-122.0320474".to_string(),
        }];
        assert!(first_coordinate(places).is_none());
    }
}
