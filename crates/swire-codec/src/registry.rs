//! # Codec Registry
//!
//! Process-scoped catalog mapping codec identities to codec instances,
//! with an explicit two-phase lifecycle:
//!
//! 1. **Build** — single-threaded, mutable. [`CodecRegistry::register`]
//!    indexes each codec under every key and `(tag, media type)` pair
//!    it declares, rejecting collisions immediately.
//! 2. **Freeze** — [`CodecRegistry::initialize`] moves the indexes into
//!    a shared immutable core and hands every codec a [`Resolver`]: a
//!    weak, non-owning lookup view. Idempotent; a second call is a
//!    no-op.
//!
//! After the freeze the maps are never mutated — any number of
//! encode/decode calls read them concurrently without locking. Hot
//! reload is a new registry plus re-binding, never in-place mutation:
//! a resolver whose registry was dropped reports `NotInitialized`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use swire_core::{CodecError, CodecKey, CodecSelector, DomainTag, MediaType};
use swire_doc::WireFragment;
use swire_model::DomainValue;

use crate::codec::Codec;

/// The frozen lookup tables shared between the registry and the
/// resolvers handed to delegating codecs.
struct RegistryCore {
    by_key: HashMap<CodecKey, Arc<dyn Codec>>,
    by_type: HashMap<(DomainTag, MediaType), Arc<dyn Codec>>,
}

impl RegistryCore {
    fn resolve(&self, tag: DomainTag, media_type: MediaType) -> Result<Arc<dyn Codec>, CodecError> {
        self.by_type
            .get(&(tag, media_type))
            .cloned()
            .ok_or(CodecError::NoCodecFound {
                selector: CodecSelector::Type { tag, media_type },
            })
    }

    fn resolve_by_key(&self, key: &CodecKey) -> Result<Arc<dyn Codec>, CodecError> {
        self.by_key
            .get(key)
            .cloned()
            .ok_or_else(|| CodecError::NoCodecFound {
                selector: CodecSelector::Key(key.clone()),
            })
    }
}

/// Narrow, read-only lookup capability over a frozen registry.
///
/// Holds a weak reference: resolvers never keep a rebuilt/dropped
/// registry alive, and codecs never own the registry that owns them.
#[derive(Clone)]
pub struct Resolver {
    core: Weak<RegistryCore>,
}

impl Resolver {
    /// Resolve the unique codec for a `(tag, media type)` pair.
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the backing registry is gone;
    /// `NoCodecFound` if nothing is registered for the pair.
    pub fn resolve(
        &self,
        tag: DomainTag,
        media_type: MediaType,
    ) -> Result<Arc<dyn Codec>, CodecError> {
        let core = self.core.upgrade().ok_or(CodecError::NotInitialized)?;
        core.resolve(tag, media_type)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

/// The resolver holder a delegating codec embeds.
///
/// Written by [`Codec::bind_resolver`] during registry initialization,
/// read at encode/decode time. Re-binding replaces the previous
/// resolver, so a registry rebuild atomically redirects delegation.
/// Resolved codecs are never cached across calls.
#[derive(Debug, Default)]
pub struct DelegationSlot {
    inner: RwLock<Option<Resolver>>,
}

impl DelegationSlot {
    /// An unbound slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the resolver.
    pub fn bind(&self, resolver: Resolver) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(resolver);
    }

    /// Resolve a delegate through the bound resolver.
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the slot was never bound or the registry is
    /// gone; `NoCodecFound` if the pair has no codec.
    pub fn resolve(
        &self,
        tag: DomainTag,
        media_type: MediaType,
    ) -> Result<Arc<dyn Codec>, CodecError> {
        let resolver = {
            let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
            guard.clone().ok_or(CodecError::NotInitialized)?
        };
        resolver.resolve(tag, media_type)
    }
}

/// Catalog of codec instances with a build-then-freeze lifecycle.
#[derive(Default)]
pub struct CodecRegistry {
    by_key: HashMap<CodecKey, Arc<dyn Codec>>,
    by_type: HashMap<(DomainTag, MediaType), Arc<dyn Codec>>,
    order: Vec<Arc<dyn Codec>>,
    core: Option<Arc<RegistryCore>>,
}

impl CodecRegistry {
    /// An empty, unfrozen registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec under every key and `(tag, media type)` pair
    /// it declares, preserving insertion order.
    ///
    /// # Errors
    ///
    /// `DuplicateCodec` if any declared identity collides with an
    /// earlier registration — fatal, because the dispatch would be
    /// ambiguous at call time. `AlreadyInitialized` after the freeze.
    pub fn register(&mut self, codec: Arc<dyn Codec>) -> Result<(), CodecError> {
        if self.core.is_some() {
            return Err(CodecError::AlreadyInitialized);
        }

        let keys = codec.keys();
        let types = codec.supported_types();

        for key in &keys {
            if self.by_key.contains_key(key) {
                return Err(CodecError::DuplicateCodec {
                    selector: CodecSelector::Key(key.clone()),
                });
            }
        }
        for (tag, media_type) in &types {
            if self.by_type.contains_key(&(*tag, *media_type)) {
                return Err(CodecError::DuplicateCodec {
                    selector: CodecSelector::Type {
                        tag: *tag,
                        media_type: *media_type,
                    },
                });
            }
        }

        for key in keys {
            tracing::debug!(codec = codec.name(), %key, "registering codec key");
            self.by_key.insert(key, Arc::clone(&codec));
        }
        for (tag, media_type) in types {
            tracing::debug!(codec = codec.name(), %tag, %media_type, "registering codec type");
            self.by_type.insert((tag, media_type), Arc::clone(&codec));
        }
        self.order.push(codec);
        Ok(())
    }

    /// Freeze the registry and hand every codec its [`Resolver`].
    ///
    /// Idempotent: calling it twice is a no-op.
    pub fn initialize(&mut self) {
        if self.core.is_some() {
            return;
        }

        let core = Arc::new(RegistryCore {
            by_key: self.by_key.clone(),
            by_type: self.by_type.clone(),
        });
        for codec in &self.order {
            codec.bind_resolver(Resolver {
                core: Arc::downgrade(&core),
            });
        }
        tracing::debug!(codecs = self.order.len(), "codec registry initialized");
        self.core = Some(core);
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_initialized(&self) -> bool {
        self.core.is_some()
    }

    fn frozen(&self) -> Result<&Arc<RegistryCore>, CodecError> {
        self.core.as_ref().ok_or(CodecError::NotInitialized)
    }

    /// Resolve the unique codec for a `(tag, media type)` pair.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before the freeze; `NoCodecFound` if nothing is
    /// registered for the pair.
    pub fn resolve(
        &self,
        tag: DomainTag,
        media_type: MediaType,
    ) -> Result<Arc<dyn Codec>, CodecError> {
        self.frozen()?.resolve(tag, media_type)
    }

    /// Resolve a codec by its exact key, for protocol-version-specific
    /// dispatch.
    ///
    /// # Errors
    ///
    /// Same kinds as [`resolve`](Self::resolve).
    pub fn resolve_by_key(&self, key: &CodecKey) -> Result<Arc<dyn Codec>, CodecError> {
        self.frozen()?.resolve_by_key(key)
    }

    /// Read-only enumeration of registered codecs in insertion order.
    ///
    /// Available before and after the freeze: diagnostics and batch
    /// initialization walk it, nothing else should.
    pub fn codecs(&self) -> impl Iterator<Item = &Arc<dyn Codec>> {
        self.order.iter()
    }

    /// Top-level encode: resolve by key, apply the highest-precedence
    /// null check, then dispatch.
    ///
    /// `None` models an absent input value; it fails with the stable
    /// reason `null` before any field-level validation runs.
    ///
    /// # Errors
    ///
    /// `NoCodecFound`/`NotInitialized` from resolution, or whatever the
    /// codec's encode produces — delegated failures included, verbatim.
    pub fn encode(
        &self,
        key: &CodecKey,
        value: Option<&DomainValue>,
    ) -> Result<WireFragment, CodecError> {
        let codec = self.resolve_by_key(key)?;
        match value {
            None => Err(CodecError::unsupported_input(codec.name(), "null")),
            Some(value) => {
                tracing::debug!(codec = codec.name(), tag = %value.tag(), "encoding");
                codec.encode(value)
            }
        }
    }

    /// Top-level decode: resolve by key and dispatch.
    ///
    /// # Errors
    ///
    /// `NoCodecFound`/`NotInitialized` from resolution, or the codec's
    /// `Decoding` failure.
    pub fn decode(&self, key: &CodecKey, fragment: &WireFragment) -> Result<DomainValue, CodecError> {
        let codec = self.resolve_by_key(key)?;
        tracing::debug!(codec = codec.name(), fragment = fragment.name(), "decoding");
        codec.decode(fragment)
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("codecs", &self.order.len())
            .field("initialized", &self.core.is_some())
            .finish()
    }
}
