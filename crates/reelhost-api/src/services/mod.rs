pub mod upload;

pub use upload::{read_capped_field, stage_video_field, SizeBudget, StagedVideo};
