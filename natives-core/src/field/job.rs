use crate::category::Category;
use super::NativeField;

/// Attributes the scheduler reports for a job.
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
pub enum JobField {
    #[strum(serialize = "state")]
    State,

    #[strum(serialize = "slave")]
    Slave,

    #[strum(serialize = "account")]
    Account,

    #[strum(serialize = "args")]
    Arguments,

    #[strum(serialize = "comment")]
    Comment,

    #[strum(serialize = "completetime")]
    CompleteTime,

    #[strum(serialize = "dgres")]
    GenericResourcesDedicated,

    #[strum(serialize = "enddate")]
    EndDate,

    #[strum(serialize = "env")]
    Environment,

    #[strum(serialize = "error")]
    Error,

    #[strum(serialize = "exec")]
    Executable,

    #[strum(serialize = "exitcode")]
    ExitCode,

    #[strum(serialize = "flags")]
    Flags,

    #[strum(serialize = "gname")]
    Group,

    #[strum(serialize = "hostlist")]
    HostList,

    #[strum(serialize = "input")]
    Input,

    #[strum(serialize = "iwd")]
    InitialWorkingDir,

    #[strum(serialize = "name")]
    Name,

    #[strum(serialize = "nodes")]
    Nodes,

    #[strum(serialize = "output")]
    Output,

    #[strum(serialize = "partitionmask")]
    PartitionMask,

    #[strum(serialize = "priority")]
    Priority,

    #[strum(serialize = "qos")]
    Qos,

    #[strum(serialize = "queuetime")]
    QueueTime,

    #[strum(serialize = "rarch")]
    RequiredArchitecture,

    #[strum(serialize = "rdisk")]
    RequiredDisk,

    #[strum(serialize = "reqrsv")]
    RequestedReservation,

    #[strum(serialize = "rfeatures")]
    RequiredFeatures,

    #[strum(serialize = "rmem")]
    RequiredMemory,

    #[strum(serialize = "ropsys")]
    RequiredOs,

    #[strum(serialize = "rswap")]
    RequiredSwap,

    #[strum(serialize = "startdate")]
    StartDate,

    #[strum(serialize = "starttime")]
    StartTime,

    #[strum(serialize = "suspendtime")]
    SuspendTime,

    #[strum(serialize = "tasklist")]
    TaskList,

    #[strum(serialize = "tasks")]
    Tasks,

    #[strum(serialize = "taskpernode")]
    TasksPerNode,

    #[strum(serialize = "uname")]
    User,

    #[strum(serialize = "wclimit")]
    WallClockLimit,
}

impl NativeField for JobField {
    const CATEGORY: Category = Category::Job;
}
