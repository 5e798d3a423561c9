#[derive(strum_macros::Display)]
pub enum EnvVar {
    #[strum(serialize = "NATIVES_CONFIG_DIR")]
    ConfigDir,

    #[strum(serialize = "NATIVES_RUN_MODE")]
    RunMode,

    #[strum(serialize = "natives")]
    OverridePrefix,
}

#[derive(strum_macros::Display)]
pub enum ConfKey {
    #[strum(serialize = "resolver.unknown_attribute_policy")]
    UnknownAttributePolicy,
}

#[derive(strum_macros::Display)]
pub enum MetricLabel {
    #[strum(serialize = "resolved")]
    Resolved,

    #[strum(serialize = "unknown")]
    Unknown,
}
