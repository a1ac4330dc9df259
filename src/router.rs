use std::sync::Arc;

use log::debug;
use petgraph::algo::astar;

use crate::{
    data::{Journey, Miles, StopId},
    error::RouteError,
    network::Network,
};

#[derive(Debug, Clone)]
pub struct Router {
    pub network: Arc<Network>,
}

impl Router {
    pub fn new(network: Arc<Network>) -> Self {
        Self { network }
    }

    /// Display names of the stops along the cheapest path, both endpoints included.
    pub fn route(&self, stop1: &str, stop2: &str) -> Result<Vec<String>, RouteError> {
        Ok(self.journey(stop1, stop2)?.stops)
    }

    pub fn journey(&self, stop1: &str, stop2: &str) -> Result<Journey, RouteError> {
        let from = self.resolve(stop1)?;
        let to = self.resolve(stop2)?;
        debug!("Routing {:?} ({}) to {:?} ({})", stop1, from, stop2, to);

        let no_path = || RouteError::NoPath {
            from: from.to_owned(),
            to: to.to_owned(),
        };

        let graph = &self.network.graph;
        let start = self.network.node_index(from).ok_or_else(no_path)?;
        let goal = self.network.node_index(to).ok_or_else(no_path)?;

        // Zero heuristic: astar degenerates to Dijkstra but hands back the path.
        let (cost, path) = astar(
            graph,
            start,
            |node| node == goal,
            |edge| *edge.weight(),
            |_| Miles::default(),
        )
        .ok_or_else(no_path)?;
        debug!("Found path over {} stops with cost {}", path.len(), cost);

        let stop_ids: Vec<StopId> = path.into_iter().map(|node| graph[node].clone()).collect();
        let stops = stop_ids
            .iter()
            .map(|stop_id| {
                self.network
                    .display_name(stop_id)
                    .map_or_else(|| stop_id.to_owned(), str::to_owned)
            })
            .collect();

        Ok(Journey {
            stop_ids,
            stops,
            cost,
        })
    }

    fn resolve<'a>(&'a self, name: &str) -> Result<&'a StopId, RouteError> {
        self.network.stop_id(name).ok_or_else(|| RouteError::NotFound {
            name: name.to_owned(),
        })
    }
}
