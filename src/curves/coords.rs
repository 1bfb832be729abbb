//! Punkte in Kurven-Definitionen: `[x, y]` oder `[x, y, z]`, z fehlt → 0.
//!
//! Nur für das Einlesen; geschrieben wird immer das 3-Tupel von `DVec3`.

use glam::DVec3;
use serde::de::{Deserializer, Error};
use serde::Deserialize;

struct Coords(DVec3);

impl<'de> Deserialize<'de> for Coords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        match values.as_slice() {
            &[x, y] => Ok(Coords(DVec3::new(x, y, 0.0))),
            &[x, y, z] => Ok(Coords(DVec3::new(x, y, z))),
            other => Err(D::Error::invalid_length(other.len(), &"2 oder 3 Koordinaten")),
        }
    }
}

pub(super) fn point<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DVec3, D::Error> {
    Coords::deserialize(deserializer).map(|c| c.0)
}

pub(super) fn optional_point<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DVec3>, D::Error> {
    Ok(Option::<Coords>::deserialize(deserializer)?.map(|c| c.0))
}

pub(super) fn points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<DVec3>, D::Error> {
    Ok(Vec::<Coords>::deserialize(deserializer)?
        .into_iter()
        .map(|c| c.0)
        .collect())
}
