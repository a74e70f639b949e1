//! Self-describing binary serialization for tagged-union values.
//!
//! Values are built with [`wire::Engine::load`], copied with [`wire::Engine::xfer`],
//! released with [`wire::Engine::destruct`], and moved across process boundaries
//! through [`wire::Buffer`] with [`wire::Engine::pack`] and [`wire::Engine::unpack`].

/// Value model, lifecycle operations, pack buffer, type registry, and info lists.
pub mod wire;
