use crate::catalog::Store;
use crate::geo::{great_circle_km, Coordinate};

/// Scans the catalog in order and returns the store nearest to `origin`
/// with its distance in kilometers. Replacement only happens on strict
/// improvement, so the first of any equally-near stores wins. An empty
/// catalog returns None.
pub fn find(origin: Coordinate, stores: &[Store]) -> Option<(&Store, f64)> {
    let mut nearest = None;
    let mut min_km = f64::INFINITY;

    for store in stores {
        let km = great_circle_km(origin, store.coordinate());
        if km < min_km {
            min_km = km;
            nearest = Some(store);
        }
    }

    nearest.map(|store| (store, min_km))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(name: &str, lat: f64, lng: f64) -> Store {
        Store {
            name: name.to_string(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            latitude: lat,
            longitude: lng,
            extra: Default::default(),
        }
    }

    #[test]
    fn picks_nearest() {
        let stores = vec![
            store("San Francisco", 37.7790262, -122.419906),
            store("Cupertino", 37.3241877, -122.0361026),
            store("San Jose", 37.3361663, -121.890591),
        ];
        let origin = Coordinate {
            lat: 37.3317585,
            lng: -122.0320474,
        };

        let (found, km) = find(origin, &stores).unwrap();
        assert_eq!(found.name, "Cupertino");
        assert!((km - 0.9138752225311382).abs() < 0.01);
    }

    #[test]
    fn tie_keeps_first() {
        let stores = vec![
            store("first", 37.3241877, -122.0361026),
            store("second", 37.3241877, -122.0361026),
        ];
        let origin = Coordinate {
            lat: 37.3317585,
            lng: -122.0320474,
        };

        let (found, _) = find(origin, &stores).unwrap();
        assert_eq!(found.name, "first");
    }

    #[test]
    fn empty_catalog() {
        let origin = Coordinate { lat: 0.0, lng: 0.0 };
        assert!(find(origin, &[]).is_none());
    }
}
