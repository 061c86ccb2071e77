#![deny(missing_docs)]
#![doc = "Diversity-aware reconstruction of collaboration graphs: bridge pruning followed by tiered degree capping. Both passes are single-pass, locally greedy heuristics over one owned graph."]

mod capping;
mod diversity;
mod pruning;
mod reconstruct;

pub use capping::{cap_degrees, degree_target, tier_of, CapRemoval, CapReport, Tier, TierCounts};
pub use diversity::diversity;
pub use pruning::{prune_bridges, BridgeDecision, PruneReport, ReweightRule};
pub use reconstruct::{reconstruct, ReconstructionOptions, ReconstructionReport};
