use crate::category::Category;
use super::NativeField;

/// Attributes of a virtual machine. `ContainerNode` names the hypervisor
/// node hosting it.
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
pub enum VmField {
    #[strum(serialize = "state")]
    State,

    #[strum(serialize = "slave")]
    Slave,

    #[strum(serialize = "power")]
    Power,

    #[strum(serialize = "updatetime")]
    UpdateTime,

    #[strum(serialize = "containernode")]
    ContainerNode,

    #[strum(serialize = "netaddr")]
    NetworkAddress,

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

    #[strum(serialize = "gmetric")]
    GenericMetrics,

    #[strum(serialize = "os")]
    Os,

    #[strum(serialize = "oslist")]
    OsList,

    #[strum(serialize = "cpuload")]
    CpuLoad,

    #[strum(serialize = "type")]
    Type,

    #[strum(serialize = "variable")]
    Variables,

    #[strum(serialize = "migrationdisabled")]
    MigrationDisabled,
}

impl NativeField for VmField {
    const CATEGORY: Category = Category::Vm;
}
