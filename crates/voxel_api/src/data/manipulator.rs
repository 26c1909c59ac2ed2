use super::{CompositeValueStore, DataTransactionResult, ValueContainer};

/// A bundle of related, mutable data that can be copied off one holder and
/// offered to another.
///
/// Manipulators are detached snapshots: changing one never touches the
/// holder it was filled from until it is applied back.
pub trait DataManipulator: CompositeValueStore + Clone + Send + Sync {
    type Immutable: ImmutableDataManipulator<Mutable = Self>;

    /// Copies every supported value present in `source`.
    ///
    /// Returns `true` if at least one value was taken over. Values the
    /// manipulator would reject are skipped.
    fn fill(&mut self, source: &dyn ValueContainer) -> bool;

    /// Offers every value of this manipulator to `target`.
    fn apply_to(&self, target: &mut dyn CompositeValueStore) -> DataTransactionResult;

    fn as_immutable(&self) -> Self::Immutable;
}

/// The read-only counterpart of a [`DataManipulator`].
pub trait ImmutableDataManipulator: ValueContainer + Clone + Send + Sync {
    type Mutable: DataManipulator;

    fn as_mutable(&self) -> Self::Mutable;
}
