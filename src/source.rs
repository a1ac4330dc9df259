use std::{io, path::Path};

use serde::Deserialize;

use crate::{
    data::{Miles, StopId},
    error::LoadError,
};

/// One row of the stop distance table: a hop between two consecutive stops of a line.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub route_id: String,
    pub from_stop_id: StopId,
    pub from_stop_name: String,
    pub to_stop_id: StopId,
    pub to_stop_name: String,
    pub from_to_miles: Miles,
    pub from_station_id: String,
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<StopRecord>, LoadError> {
    let path = path.as_ref();
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    csv::Reader::from_path(path)
        .map_err(csv_error)?
        .deserialize::<StopRecord>()
        .collect::<Result<_, _>>()
        .map_err(csv_error)
}

pub fn from_reader<R: io::Read>(reader: R) -> Result<Vec<StopRecord>, LoadError> {
    Ok(csv::Reader::from_reader(reader)
        .deserialize::<StopRecord>()
        .collect::<Result<_, csv::Error>>()?)
}
