use crate::category::Category;
use super::NativeField;

/// Attributes of a compute node.
///
/// `Slave` marks a report that only updates a node owned by another resource
/// manager rather than declaring it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
pub enum NodeField {
    #[strum(serialize = "state")]
    State,

    #[strum(serialize = "slave")]
    Slave,

    #[strum(serialize = "updatetime")]
    UpdateTime,

    #[strum(serialize = "cproc")]
    ProcessorsConfigured,

    #[strum(serialize = "aproc")]
    ProcessorsAvailable,

    #[strum(serialize = "cmemory")]
    MemoryConfigured,

    #[strum(serialize = "amemory")]
    MemoryAvailable,

    #[strum(serialize = "cdisk")]
    DiskConfigured,

    #[strum(serialize = "adisk")]
    DiskAvailable,

    #[strum(serialize = "cswap")]
    SwapConfigured,

    #[strum(serialize = "aswap")]
    SwapAvailable,

    #[strum(serialize = "arch")]
    Architecture,

    #[strum(serialize = "cres")]
    GenericResourcesConfigured,

    #[strum(serialize = "ares")]
    GenericResourcesAvailable,

    #[strum(serialize = "cpuload")]
    CpuLoad,

    #[strum(serialize = "hvtype")]
    HypervisorType,

    #[strum(serialize = "feature")]
    Features,

    #[strum(serialize = "gmetric")]
    GenericMetrics,

    #[strum(serialize = "message")]
    Messages,

    #[strum(serialize = "os")]
    Os,

    #[strum(serialize = "oslist")]
    OsList,

    #[strum(serialize = "netaddr")]
    NetworkAddress,

    #[strum(serialize = "partition")]
    Partition,

    #[strum(serialize = "power")]
    Power,

    #[strum(serialize = "speed")]
    Speed,

    #[strum(serialize = "type")]
    Type,

    #[strum(serialize = "variable")]
    Variables,

    #[strum(serialize = "varattr")]
    Attributes,

    #[strum(serialize = "migrationdisabled")]
    MigrationDisabled,

    #[strum(serialize = "vmoslist")]
    VmOsList,

    #[strum(serialize = "timetolive")]
    TimeToLive,

    #[strum(serialize = "acl")]
    Acl,

    #[strum(serialize = "requestid")]
    RequestId,
}

impl NativeField for NodeField {
    const CATEGORY: Category = Category::Node;
}
