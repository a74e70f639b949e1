use crate::wire::{Proc, Timeval};

/// Resource usage sample for one process.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcStats {
	/// Node the process runs on.
	pub node: Option<String>,
	/// Process identifier.
	pub proc: Proc,
	/// OS process id.
	pub pid: i32,
	/// Command line.
	pub cmd: Option<String>,
	/// Scheduler state character.
	pub state: u8,
	/// Accumulated cpu time.
	pub time: Timeval,
	/// Cpu utilization percentage.
	pub percent_cpu: f32,
	/// Scheduling priority.
	pub priority: i32,
	/// Thread count.
	pub num_threads: u16,
	/// Proportional set size in MB.
	pub pss: f32,
	/// Virtual size in MB.
	pub vsize: f32,
	/// Resident set size in MB.
	pub rss: f32,
	/// Peak virtual size in MB.
	pub peak_vsize: f32,
	/// Processor last run on.
	pub processor: u16,
	/// When the sample was taken.
	pub sample_time: Timeval,
}

/// Counters for one block device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiskStats {
	/// Device name.
	pub disk: Option<String>,
	/// Completed reads.
	pub num_reads_completed: u64,
	/// Merged reads.
	pub num_reads_merged: u64,
	/// Sectors read.
	pub num_sectors_read: u64,
	/// Milliseconds spent reading.
	pub milliseconds_reading: u64,
	/// Completed writes.
	pub num_writes_completed: u64,
	/// Merged writes.
	pub num_writes_merged: u64,
	/// Sectors written.
	pub num_sectors_written: u64,
	/// Milliseconds spent writing.
	pub milliseconds_writing: u64,
	/// IOs currently in flight.
	pub num_ios_in_progress: u64,
	/// Milliseconds doing IO.
	pub milliseconds_io: u64,
	/// Weighted milliseconds doing IO.
	pub weighted_milliseconds_io: u64,
}

/// Counters for one network interface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetStats {
	/// Interface name.
	pub net_interface: Option<String>,
	/// Bytes received.
	pub num_bytes_recvd: u64,
	/// Packets received.
	pub num_packets_recvd: u64,
	/// Receive errors.
	pub num_recv_errs: u64,
	/// Bytes sent.
	pub num_bytes_sent: u64,
	/// Packets sent.
	pub num_packets_sent: u64,
	/// Send errors.
	pub num_send_errs: u64,
}

/// Node-wide load and memory sample, with per-device counters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeStats {
	/// Node name.
	pub node: Option<String>,
	/// One-minute load average.
	pub la: f32,
	/// Five-minute load average.
	pub la5: f32,
	/// Fifteen-minute load average.
	pub la15: f32,
	/// Total memory in MB.
	pub total_mem: f32,
	/// Free memory in MB.
	pub free_mem: f32,
	/// Buffer memory in MB.
	pub buffers: f32,
	/// Cached memory in MB.
	pub cached: f32,
	/// Swap cache in MB.
	pub swap_cached: f32,
	/// Total swap in MB.
	pub swap_total: f32,
	/// Free swap in MB.
	pub swap_free: f32,
	/// Mapped memory in MB.
	pub mapped: f32,
	/// When the sample was taken.
	pub sample_time: Timeval,
	/// Per-disk counters.
	pub diskstats: Vec<DiskStats>,
	/// Per-interface counters.
	pub netstats: Vec<NetStats>,
}
