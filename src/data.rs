use std::fmt;

pub type StopId = String;

/// Path cost unit. Line edges carry track miles, transfer edges a flat penalty on the same scale.
pub type Miles = f64;

pub const TRANSFER_PENALTY: Miles = 3.0;

pub fn display_name(route_id: &str, stop_name: &str) -> String {
    format!("{} {}", route_id, stop_name)
}

/// How the builder treats a stop name that shows up with more than one stop id.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum NamePolicy {
    /// Keep the id of the last record mentioning the name.
    #[default]
    LastWins,
    /// Fail the build on the first conflicting id.
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub stop_ids: Vec<StopId>,
    pub stops: Vec<String>,
    pub cost: Miles,
}

impl Journey {
    pub fn transfers(&self) -> usize {
        self.stops
            .windows(2)
            .filter(|pair| route_of(&pair[0]) != route_of(&pair[1]))
            .count()
    }
}

fn route_of(display_name: &str) -> &str {
    display_name
        .split_once(' ')
        .map_or(display_name, |(route_id, _)| route_id)
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stop in &self.stops {
            writeln!(f, "{}", stop)?;
        }
        write!(f, "Total cost: {:.2}", self.cost)
    }
}
