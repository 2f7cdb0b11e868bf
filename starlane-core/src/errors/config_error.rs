/// Calculator configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("jump radius too large: requested {requested}, max {max}")]
    JumpRadiusTooLarge { requested: u32, max: u32 },
}
