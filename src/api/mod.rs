mod assembler;
mod batch;
mod inputs;
mod json_contract;
mod style;

pub use assembler::{ChartAssembler, ChartKind};
pub use batch::{ChartRequest, SceneCacheKey};
pub use inputs::{
    ClubActivity, IMPRESSIONS_CHANNEL, LAST_WEEK_CHANNEL, PERCENTAGE_CHANNEL, PollSplit,
    PostImpressions, THIS_WEEK_CHANNEL, TimeWindow, club_activity_series, poll_series,
    post_impressions_series,
};
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
pub use style::ChartStyleConfig;
