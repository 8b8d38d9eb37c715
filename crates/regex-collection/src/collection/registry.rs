//! # Pattern Registry

use std::sync::LazyLock;

use strum::IntoEnumIterator;

use crate::{
    collection::{CompiledMatcher, PatternName},
    errors::{RCResult, RegexCollectionError},
    support::regex::RegexCompileOptions,
};

static GLOBAL_REGISTRY: LazyLock<PatternRegistry> = LazyLock::new(|| {
    match PatternRegistry::new() {
        Ok(registry) => {
            log::debug!("global pattern registry ready: {} patterns", registry.len());
            registry
        }
        // The built-in patterns are constants; this is a defect, not a runtime condition.
        Err(err) => panic!("built-in pattern collection failed to compile: {err}"),
    }
});

/// Force compilation of the global registry.
///
/// Call this at process start-up to move the one-time compile cost
/// (and any defect in the built-in patterns) out of the first match.
pub fn init() {
    LazyLock::force(&GLOBAL_REGISTRY);
}

/// A compiled matcher for every [`PatternName`].
///
/// Most callers want the process-wide [`PatternRegistry::global`] instance,
/// or the per-pattern accessor functions that read from it.
/// Private registries are useful for alternate [`RegexCompileOptions`].
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    matchers: Vec<CompiledMatcher>,
}

impl PatternRegistry {
    /// Compile every pattern with default engine limits.
    pub fn new() -> RCResult<Self> {
        Self::with_options(&RegexCompileOptions::default())
    }

    /// Compile every pattern with the given engine limits.
    ///
    /// ## Returns
    /// The registry, or the compile error of the first pattern that failed.
    #[cfg_attr(feature = "tracing", tracing::instrument)]
    pub fn with_options(options: &RegexCompileOptions) -> RCResult<Self> {
        let matchers = PatternName::iter()
            .map(|name| CompiledMatcher::compile(name, options))
            .collect::<RCResult<Vec<_>>>()?;

        Ok(Self { matchers })
    }

    /// The process-wide registry.
    ///
    /// Compiled on first use (or by [`init`]); shared by every thread afterwards.
    pub fn global() -> &'static Self {
        &GLOBAL_REGISTRY
    }

    /// The number of registered patterns.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Get the matcher for `name`.
    pub fn get(
        &self,
        name: PatternName,
    ) -> &CompiledMatcher {
        &self.matchers[name as usize]
    }

    /// Get the matcher by name.
    ///
    /// Accepts anything [`PatternName`] parses: `"DnsHostname"`, `"dns_hostname"`, ...
    pub fn lookup(
        &self,
        name: &str,
    ) -> RCResult<&CompiledMatcher> {
        let name: PatternName = name
            .parse()
            .map_err(|_| RegexCollectionError::UnknownPattern(name.to_string()))?;
        Ok(self.get(name))
    }

    /// Iterate over `(name, matcher)` pairs in [`PatternName`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PatternName, &CompiledMatcher)> {
        self.matchers.iter().map(|m| (m.name(), m))
    }
}
