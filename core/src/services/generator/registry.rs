//! Named registry of code generation strategies.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::GeneratorError;

use super::numeric::NumericGenerator;
use super::numeric_no_zero::NumericNo0Generator;
use super::string::StringGenerator;
use super::traits::CodeGenerator;

/// Probe length used to validate a strategy at registration time
const VALIDATION_LENGTH: usize = 6;

/// Wraps a bare closure as a [`CodeGenerator`] strategy
struct FnGenerator<F>(F);

impl<F> std::fmt::Debug for FnGenerator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnGenerator").finish_non_exhaustive()
    }
}

impl<F> CodeGenerator for FnGenerator<F>
where
    F: Fn(usize) -> String + Send + Sync,
{
    fn generate(&self, length: usize) -> String {
        (self.0)(length)
    }
}

/// Registry of named code generation strategies
///
/// The registry is an explicit, constructed object handed to the service at
/// startup. It is populated during wiring and read thereafter; registering
/// strategies during live traffic is not a supported use case.
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn CodeGenerator>>,
}

impl GeneratorRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// A registry preloaded with the built-in strategies
    /// `string`, `numeric` and `numeric-no-0`
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.insert("string", Arc::new(StringGenerator));
        registry.insert("numeric", Arc::new(NumericGenerator));
        registry.insert("numeric-no-0", Arc::new(NumericNo0Generator));

        registry
    }

    fn insert(&mut self, name: &str, generator: Arc<dyn CodeGenerator>) {
        self.generators.insert(name.to_string(), generator);
    }

    /// Binds a ready-made strategy to a name
    ///
    /// Re-registering a name replaces the previous strategy.
    ///
    /// # Returns
    ///
    /// [`GeneratorError::InvalidStrategy`] when the strategy cannot produce
    /// a code
    pub fn register(
        &mut self,
        name: impl Into<String>,
        generator: Arc<dyn CodeGenerator>,
    ) -> Result<(), GeneratorError> {
        let name = name.into();

        if generator.generate(VALIDATION_LENGTH).is_empty() {
            return Err(GeneratorError::InvalidStrategy { name });
        }

        self.generators.insert(name, generator);
        Ok(())
    }

    /// Binds a bare callable to a name
    pub fn register_fn<F>(&mut self, name: impl Into<String>, generator: F) -> Result<(), GeneratorError>
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.register(name, Arc::new(FnGenerator(generator)))
    }

    /// Resolves a factory and binds the produced strategy to a name
    ///
    /// This replaces registration by class name in earlier deployments: the
    /// factory runs exactly once, here at wiring time.
    ///
    /// # Returns
    ///
    /// [`GeneratorError::Instantiation`] when the factory fails, or
    /// [`GeneratorError::InvalidStrategy`] when the produced strategy cannot
    /// generate a code
    pub fn register_factory<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), GeneratorError>
    where
        F: FnOnce() -> Result<Arc<dyn CodeGenerator>, String>,
    {
        let name = name.into();

        let generator = factory().map_err(|reason| GeneratorError::Instantiation {
            name: name.clone(),
            reason,
        })?;

        self.register(name, generator)
    }

    /// Returns the strategy registered under `name`
    ///
    /// # Returns
    ///
    /// [`GeneratorError::Unregistered`] when the name was never registered
    pub fn get(&self, name: &str) -> Result<Arc<dyn CodeGenerator>, GeneratorError> {
        self.generators
            .get(name)
            .cloned()
            .ok_or_else(|| GeneratorError::Unregistered {
                name: name.to_string(),
            })
    }

    /// Whether a strategy is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
