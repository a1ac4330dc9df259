use std::path::PathBuf;

use thiserror::Error;

use crate::data::{Miles, StopId};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read stop distances from {path:?}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed stop distance record")]
    Read(#[from] csv::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Stop name {name:?} refers to both Stop {existing:?} and Stop {conflicting:?}")]
    NameCollision {
        name: String,
        existing: StopId,
        conflicting: StopId,
    },

    #[error("Invalid weight {weight} between Stop {from:?} and Stop {to:?}")]
    InvalidWeight {
        from: StopId,
        to: StopId,
        weight: Miles,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No such Stop {name:?}")]
    NotFound { name: String },

    #[error("No path between Stop {from:?} and Stop {to:?}")]
    NoPath { from: StopId, to: StopId },
}
