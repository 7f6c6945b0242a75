//! API responses for the [`stats`](crate::servers::apis::v1::context::stats)
//! API context.
use axum::response::Json;
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;

use super::resources::Stats;

/// `200` response that contains the [`Stats`] resource as json.
#[must_use]
pub fn stats_response(metrics: TorrentsMetrics) -> Json<Stats> {
    Json(Stats::from(metrics))
}
