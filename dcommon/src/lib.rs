//! Shared primitives for the dovetail workspace crates.
//!
//! ```rust
//! use dcommon::Registry;
//!
//! let mut registry = Registry::new();
//! registry.insert("alpha".to_string(), 1_u32);
//! registry.insert("beta".to_string(), 2_u32);
//!
//! let keys: Vec<&str> = registry.iter().map(|(key, _)| key.as_str()).collect();
//! assert_eq!(keys, ["alpha", "beta"]);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use dcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod registry {
    //! Generic registry map preserving insertion order.
    //!
    //! Lookup is keyed; iteration yields entries in the order they were
    //! first inserted. Replacing a value keeps its original position.
    //!
    //! ```rust
    //! use dcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! assert_eq!(registry.get("alpha"), Some(&1));
    //! assert!(registry.contains_key("alpha"));
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        entries: Vec<(K, V)>,
        index: HashMap<K, usize>,
    }

    impl<K, V> Default for Registry<K, V> {
        fn default() -> Self {
            Self {
                entries: Vec::new(),
                index: HashMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash + Clone,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            match self.index.get(&key) {
                Some(&position) => {
                    Some(std::mem::replace(&mut self.entries[position].1, value))
                }
                None => {
                    self.index.insert(key.clone(), self.entries.len());
                    self.entries.push((key, value));
                    None
                }
            }
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.index.get(key).map(|&position| &self.entries[position].1)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            let position = self.index.remove(key)?;
            let (_, value) = self.entries.remove(position);
            for (stored, _) in self.entries.iter().skip(position) {
                if let Some(slot) = self.index.get_mut::<K>(stored) {
                    *slot -= 1;
                }
            }
            Some(value)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.index.contains_key(key)
        }

        pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
            self.entries.iter().map(|(key, value)| (key, value))
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.entries.iter().map(|(_, value)| value)
        }

        pub fn len(&self) -> usize {
            self.entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }
    }
}

pub use future::BoxFuture;
pub use registry::Registry;
