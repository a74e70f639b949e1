use std::fmt;
use std::sync::Arc;

use crate::wire::{
	Buffer, DataType, DetachedTopology, EngineConfig, LiteralPatterns, PatternSupport, Result, TopologySupport, TypeOps, TypeRegistry,
};

/// Process-wide serialization context: configuration, type registry, and collaborators.
///
/// Built once and shared read-only; every lifecycle and codec operation takes it explicitly.
pub struct Engine {
	config: EngineConfig,
	registry: TypeRegistry,
	topology: Arc<dyn TopologySupport>,
	patterns: Arc<dyn PatternSupport>,
}

impl Engine {
	/// Engine with built-in types and default collaborators.
	pub fn new(config: EngineConfig) -> Result<Self> {
		Self::builder(config).build()
	}

	/// Start configuring an engine.
	pub fn builder(config: EngineConfig) -> EngineBuilder {
		EngineBuilder {
			config,
			topology: Arc::new(DetachedTopology),
			patterns: Arc::new(LiteralPatterns),
			extensions: Vec::new(),
		}
	}

	/// Active configuration.
	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// Registered type operations.
	pub fn registry(&self) -> &TypeRegistry {
		&self.registry
	}

	/// Diagnostic name of a registered tag.
	pub fn data_type_string(&self, ty: DataType) -> Option<&str> {
		self.registry.data_type_string(ty)
	}

	/// Empty buffer using the configured growth policy and description mode.
	pub fn new_buffer(&self) -> Buffer {
		Buffer::with_config(self.config.buffer, self.config.buffer_type)
	}

	pub(crate) fn topology(&self) -> &dyn TopologySupport {
		self.topology.as_ref()
	}

	pub(crate) fn patterns(&self) -> &dyn PatternSupport {
		self.patterns.as_ref()
	}
}

impl Default for Engine {
	fn default() -> Self {
		Self {
			config: EngineConfig::default(),
			registry: TypeRegistry::with_builtins(),
			topology: Arc::new(DetachedTopology),
			patterns: Arc::new(LiteralPatterns),
		}
	}
}

impl fmt::Debug for Engine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Engine")
			.field("config", &self.config)
			.field("registered_types", &self.registry.len())
			.finish_non_exhaustive()
	}
}

/// Builder for [`Engine`].
pub struct EngineBuilder {
	config: EngineConfig,
	topology: Arc<dyn TopologySupport>,
	patterns: Arc<dyn PatternSupport>,
	extensions: Vec<(DataType, String, Arc<dyn TypeOps>)>,
}

impl EngineBuilder {
	/// Use `topology` for topology and cpuset copies.
	pub fn topology(mut self, topology: impl TopologySupport + 'static) -> Self {
		self.topology = Arc::new(topology);
		self
	}

	/// Use `patterns` for `REGEX` payloads.
	pub fn patterns(mut self, patterns: impl PatternSupport + 'static) -> Self {
		self.patterns = Arc::new(patterns);
		self
	}

	/// Register an extension type alongside the built-ins.
	pub fn register_type(mut self, ty: DataType, name: impl Into<String>, ops: Arc<dyn TypeOps>) -> Self {
		self.extensions.push((ty, name.into(), ops));
		self
	}

	/// Validate configuration and build the engine.
	pub fn build(self) -> Result<Engine> {
		self.config.validate()?;

		let mut registry = TypeRegistry::with_builtins();
		for (ty, name, ops) in self.extensions {
			registry.register(ty, name, ops)?;
		}

		tracing::debug!(
			types = registry.len(),
			buffer_type = self.config.buffer_type.as_str(),
			strict = self.config.strict_types,
			"engine ready"
		);
		Ok(Engine {
			config: self.config,
			registry,
			topology: self.topology,
			patterns: self.patterns,
		})
	}
}
