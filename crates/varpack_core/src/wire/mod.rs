mod array;
mod buffer;
mod codec;
mod compression;
mod config;
mod copy;
mod engine;
mod error;
mod info;
mod key;
mod lifecycle;
mod list;
mod payload;
mod print;
mod registry;
mod stats;
mod topo;
mod types;
mod value;

/// Data-array container and element kinds.
pub use array::{ArrayItems, DataArray, Kval};
/// Growable pack/unpack buffer and its allocation hook.
pub use buffer::{Buffer, BufferAlloc, SystemAlloc};
/// Wire encoding helpers shared with extension types.
pub use codec::{get_data_type, pack_values, store_data_type, unpack_values};
/// zstd helpers behind the compressed value kinds.
pub use compression::{ZSTD_MAGIC, compress, decompress};
/// Engine and buffer configuration with environment overrides.
pub use config::{
	BufferConfig, BufferType, ENV_BUFFER_INITIAL_SIZE, ENV_BUFFER_THRESHOLD_SIZE, ENV_BUFFER_TYPE, ENV_COMPRESS_LIMIT, ENV_MAX_DEPTH, ENV_STRICT_TYPES,
	EngineConfig,
};
/// Serialization context and its builder.
pub use engine::{Engine, EngineBuilder};
/// Error and result aliases.
pub use error::{Result, WireError};
/// Key/value records with directive flags.
pub use info::{Info, InfoFlags, InfoSlot};
/// Bounded key and namespace strings.
pub use key::{Key, MAX_KEYLEN, MAX_NSLEN, Nspace};
/// Payloads returned by `unload`.
pub use lifecycle::{Extracted, Unloaded};
/// Ordered info builder.
pub use list::InfoList;
/// Plain composite payload records.
pub use payload::{Coord, DeviceDistance, Endpoint, Envar, Geometry, Proc, ProcInfo, RegAttr, Timeval};
/// Diagnostic rendering used by the built-in print operation.
pub use print::render;
/// Type registry and per-type operation bundles.
pub use registry::{BuiltinOps, TypeInfo, TypeOps, TypeRegistry};
/// Resource-usage sample records.
pub use stats::{DiskStats, NetStats, NodeStats, ProcStats};
/// Topology payloads and external collaborator hooks.
pub use topo::{Cpuset, DetachedTopology, Held, LiteralPatterns, LocalTopology, PatternSupport, Topology, TopologySupport};
/// Type tags.
pub use types::DataType;
/// Tagged-union value and borrowed load sources.
pub use value::{Alias, Datum, ScalarBytes, Value};
