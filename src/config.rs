use crate::sync::*;

/// Configuration of a sequence
#[derive(Clone, Debug, Default)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    pub fn new(locate: Locate) -> Self {
        let inner = ConfigInner { locate };
        Self(Arc::new(inner))
    }
}

impl std::ops::Deref for Config {
    type Target = ConfigInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug)]
pub struct ConfigInner {
    /// Which end the index locator walks from
    pub locate: Locate,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self { locate: Locate::Nearest }
    }
}

/// Traversal policy used to find the node at an index.
///
/// All policies yield the same node for the same index; they only differ
/// in how many links are followed to get there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locate {
    /// Walk from whichever end is closer: head when `index <= len / 2`, tail otherwise
    Nearest,
    /// Always walk forward from head
    FromHead,
    /// Always walk backward from tail
    FromTail,
}

impl Locate {
    /// Whether the walk for `index` in a sequence of `len` starts at head
    pub(crate) fn from_head(self, index: usize, len: usize) -> bool {
        match self {
            Locate::Nearest => index <= len / 2,
            Locate::FromHead => true,
            Locate::FromTail => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_nearest() {
        let config = Config::default();
        assert_eq!(config.locate, Locate::Nearest);
    }

    #[test]
    fn test_nearest_splits_at_half() {
        // len 5: 0, 1, 2 from head; 3, 4 from tail
        assert!(Locate::Nearest.from_head(0, 5));
        assert!(Locate::Nearest.from_head(2, 5));
        assert!(!Locate::Nearest.from_head(3, 5));
        assert!(!Locate::Nearest.from_head(4, 5));

        // a single element is always reached from head
        assert!(Locate::Nearest.from_head(0, 1));
    }

    #[test]
    fn test_forced_directions() {
        for index in 0..8 {
            assert!(Locate::FromHead.from_head(index, 8));
            assert!(!Locate::FromTail.from_head(index, 8));
        }
    }

    #[test]
    fn test_config_clone_shares_inner() {
        let config = Config::new(Locate::FromTail);
        let cloned = config.clone();
        assert!(Arc::ptr_eq(&config.0, &cloned.0));
        assert_eq!(cloned.locate, Locate::FromTail);
    }
}
