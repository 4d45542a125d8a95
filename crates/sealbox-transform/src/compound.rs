use crate::error::TransformResult;
use crate::traits::Processor;

/// Composes an ordered sequence of processors into one processor.
///
/// `apply` runs the constituents in declared order, feeding each output to
/// the next; `reverse` runs the SAME list in reverse order. Composition is
/// not commutative (compress-then-encrypt is not encrypt-then-compress), so
/// only the exact reverse order is the identity. An empty compound is the
/// identity transform in both directions.
#[derive(Default)]
pub struct CompoundProcessor {
    processors: Vec<Box<dyn Processor>>,
}

impl CompoundProcessor {
    /// Create from an ordered list of processors.
    pub fn new(processors: Vec<Box<dyn Processor>>) -> Self {
        Self { processors }
    }

    /// Create the identity transform (no constituents).
    pub fn identity() -> Self {
        Self::new(Vec::new())
    }

    /// Append a processor to the end of the chain.
    pub fn push(&mut self, processor: Box<dyn Processor>) {
        self.processors.push(processor);
    }

    /// Number of constituent processors.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Returns `true` if this compound is the identity.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Processor for CompoundProcessor {
    fn apply(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        let mut data = data.to_vec();
        for processor in &self.processors {
            data = processor.apply(&data)?;
        }
        Ok(data)
    }

    fn reverse(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        let mut data = data.to_vec();
        for processor in self.processors.iter().rev() {
            data = processor.reverse(&data)?;
        }
        Ok(data)
    }
}

impl std::fmt::Debug for CompoundProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompoundProcessor")
            .field("len", &self.processors.len())
            .finish()
    }
}
