use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Two declared road-maintenance cadences, both pure functions of the tick
/// count: a cheap light pass over a rotating batch of segments, and a
/// periodic thorough resync of the tracked extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceSchedule {
    pub light_interval: u64,
    pub light_batch: usize,
    pub resync_interval: u64,
}

impl Default for MaintenanceSchedule {
    fn default() -> Self {
        Self {
            light_interval: 3,
            light_batch: 8,
            resync_interval: 30,
        }
    }
}

/// What a maintenance pass should do on a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenancePlan {
    /// Pool indices to examine, possibly wrapping past the end of the pool.
    pub light: Option<Range<usize>>,
    pub resync: bool,
}

impl MaintenanceSchedule {
    pub fn plan(&self, tick: u64, pool_size: usize) -> MaintenancePlan {
        let light_interval = self.light_interval.max(1);
        let resync_interval = self.resync_interval.max(1);

        let light = if pool_size > 0 && tick % light_interval == 0 {
            let batch = self.light_batch.clamp(1, pool_size);
            let pass = tick / light_interval;
            let start = ((pass as u128 * batch as u128) % pool_size as u128) as usize;
            Some(start..start + batch)
        } else {
            None
        };

        MaintenancePlan {
            light,
            resync: tick % resync_interval == 0,
        }
    }
}
