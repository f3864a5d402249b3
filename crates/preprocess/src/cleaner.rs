//! Injected cleaning strategies applied to split units before assembly.

/// Transform applied to the full unit sequence after splitting and before
/// chunks are assembled. The returned sequence replaces the input and may
/// differ in length: filtering empty units, normalizing whitespace, and
/// similar policies belong here rather than in the splitter.
///
/// Any `Fn(Vec<String>) -> Vec<String>` closure or function is a cleaner.
pub trait UnitCleaner: Send + Sync {
    fn clean(&self, units: Vec<String>) -> Vec<String>;
}

impl<F> UnitCleaner for F
where
    F: Fn(Vec<String>) -> Vec<String> + Send + Sync,
{
    fn clean(&self, units: Vec<String>) -> Vec<String> {
        self(units)
    }
}

/// Drops units that are empty or whitespace-only.
pub fn drop_empty_units(units: Vec<String>) -> Vec<String> {
    units.into_iter().filter(|u| !u.trim().is_empty()).collect()
}
