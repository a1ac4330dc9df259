use std::collections::{hash_map::Entry, BTreeSet, HashMap};

use itertools::Itertools;
use log::{debug, info};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::{
    data::{display_name, Miles, NamePolicy, StopId, TRANSFER_PENALTY},
    error::BuildError,
    source::StopRecord,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkOptions {
    pub transfer_penalty: Miles,
    pub names: NamePolicy,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            transfer_penalty: TRANSFER_PENALTY,
            names: NamePolicy::default(),
        }
    }
}

/// The stop graph together with the lookups needed to query it by name.
///
/// Built once from the full distance table and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Network {
    pub(crate) graph: UnGraph<StopId, Miles>,
    nodes: HashMap<StopId, NodeIndex>,
    stop_id_from_name: HashMap<String, StopId>,
    stop_name_from_id: HashMap<StopId, String>,
    stop_names: BTreeSet<String>,
}

impl Network {
    pub fn build(records: &[StopRecord], options: &NetworkOptions) -> Result<Self, BuildError> {
        let mut network = Self::default();

        for record in records {
            network.register(
                &record.route_id,
                &record.from_stop_id,
                &record.from_stop_name,
                options.names,
            )?;
            network.register(
                &record.route_id,
                &record.to_stop_id,
                &record.to_stop_name,
                options.names,
            )?;
        }

        for record in records {
            network.connect(
                &record.from_stop_id,
                &record.to_stop_id,
                record.from_to_miles,
            )?;
        }
        let line_edges = network.graph.edge_count();

        network.add_transfers(records, options.transfer_penalty)?;

        info!(
            "Built network with {} stops, {} line edges and {} transfer edges",
            network.graph.node_count(),
            line_edges,
            network.graph.edge_count() - line_edges
        );

        Ok(network)
    }

    fn register(
        &mut self,
        route_id: &str,
        stop_id: &str,
        stop_name: &str,
        policy: NamePolicy,
    ) -> Result<(), BuildError> {
        match self.stop_id_from_name.entry(stop_name.to_owned()) {
            Entry::Occupied(mut entry) if entry.get() != stop_id => match policy {
                NamePolicy::Reject => {
                    return Err(BuildError::NameCollision {
                        name: stop_name.to_owned(),
                        existing: entry.get().to_owned(),
                        conflicting: stop_id.to_owned(),
                    })
                }
                NamePolicy::LastWins => {
                    debug!(
                        "Stop name {:?} now refers to Stop {:?} instead of {:?}",
                        stop_name,
                        stop_id,
                        entry.get()
                    );
                    entry.insert(stop_id.to_owned());
                }
            },
            Entry::Occupied(_) => {}
            Entry::Vacant(entry) => {
                entry.insert(stop_id.to_owned());
            }
        }

        self.stop_name_from_id
            .insert(stop_id.to_owned(), display_name(route_id, stop_name));
        self.stop_names.insert(stop_name.to_owned());

        Ok(())
    }

    fn node(&mut self, stop_id: &str) -> NodeIndex {
        if let Some(&node) = self.nodes.get(stop_id) {
            return node;
        }

        let node = self.graph.add_node(stop_id.to_owned());
        self.nodes.insert(stop_id.to_owned(), node);
        node
    }

    /// Adds an undirected edge, overwriting the weight of any edge already joining the pair.
    ///
    /// Weights must be finite and non-negative for the shortest-path search to terminate.
    fn connect(&mut self, from: &str, to: &str, weight: Miles) -> Result<(), BuildError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(BuildError::InvalidWeight {
                from: from.to_owned(),
                to: to.to_owned(),
                weight,
            });
        }

        let (a, b) = (self.node(from), self.node(to));
        self.graph.update_edge(a, b, weight);

        Ok(())
    }

    fn add_transfers(&mut self, records: &[StopRecord], penalty: Miles) -> Result<(), BuildError> {
        let stations = records
            .iter()
            .map(|record| (record.from_station_id.as_str(), record))
            .into_group_map();

        for (_, station_records) in stations.into_iter().sorted_by_key(|(station, _)| *station) {
            let lines = station_records
                .iter()
                .map(|record| record.route_id.as_str())
                .unique()
                .collect_vec();

            for (&l1, &l2) in lines.iter().tuple_combinations() {
                let on_l1 = station_records
                    .iter()
                    .filter(|record| record.route_id == l1);
                let on_l2 = station_records
                    .iter()
                    .filter(|record| record.route_id == l2)
                    .collect_vec();

                for (r1, r2) in on_l1.cartesian_product(on_l2) {
                    self.connect(&r1.from_stop_id, &r2.from_stop_id, penalty)?;
                }
            }
        }

        Ok(())
    }

    pub fn stop_id(&self, name: &str) -> Option<&StopId> {
        self.stop_id_from_name.get(name)
    }

    pub fn display_name(&self, stop_id: &str) -> Option<&str> {
        self.stop_name_from_id.get(stop_id).map(String::as_str)
    }

    pub fn stop_names(&self) -> impl Iterator<Item = &str> {
        self.stop_names.iter().map(String::as_str)
    }

    pub(crate) fn node_index(&self, stop_id: &str) -> Option<NodeIndex> {
        self.nodes.get(stop_id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Miles> {
        let edge = self
            .graph
            .find_edge(self.node_index(a)?, self.node_index(b)?)?;
        self.graph.edge_weight(edge).copied()
    }
}
