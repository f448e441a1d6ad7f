//! Two-outcome result of a cache lookup.
//!
//! The cache is advisory: a key that is absent, a cache that cannot be reached
//! and a payload that no longer decodes all mean the same thing to a reader,
//! which is "go to the store". [`CacheLookup`] collapses those cases into
//! [`CacheLookup::Miss`] so callers only ever branch on hit or miss.

/// Outcome of reading an entity from the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<T> {
    /// A usable value was found.
    Hit(T),
    /// Nothing usable was found, for any reason.
    Miss,
}

impl<T> CacheLookup<T> {
    /// Builds a lookup from a decoded cache read.
    ///
    /// ```
    /// use catalog_core::cache::CacheLookup;
    ///
    /// let hit: CacheLookup<u8> = CacheLookup::from_decoded(Ok::<_, ()>(Some(7)));
    /// assert_eq!(hit, CacheLookup::Hit(7));
    ///
    /// let absent: CacheLookup<u8> = CacheLookup::from_decoded(Ok::<_, ()>(None));
    /// assert_eq!(absent, CacheLookup::Miss);
    ///
    /// let broken: CacheLookup<u8> = CacheLookup::from_decoded(Err("bad payload"));
    /// assert_eq!(broken, CacheLookup::Miss);
    /// ```
    pub fn from_decoded<E>(decoded: Result<Option<T>, E>) -> Self {
        match decoded {
            Ok(Some(value)) => CacheLookup::Hit(value),
            Ok(None) | Err(_) => CacheLookup::Miss,
        }
    }

    /// Returns true if the lookup produced a value.
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheLookup::Hit(_))
    }
}
