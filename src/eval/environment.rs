use crate::parser::ast::Ident;
use std::collections::BTreeMap;

/// Every stored value is reduced into `0..MODULUS`.
pub const MODULUS: i64 = 10000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    store: BTreeMap<Ident, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: BTreeMap::new(),
        }
    }

    pub fn get(&self, entry: Ident) -> Option<i64> {
        self.store.get(&entry).copied()
    }

    /// Stores `val` reduced into `0..MODULUS`, negative values included, and
    /// returns the stored value.
    pub fn set(&mut self, key: Ident, val: i64) -> i64 {
        let val = val.rem_euclid(MODULUS);
        self.store.insert(key, val);
        val
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Bindings in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (Ident, i64)> + '_ {
        self.store.iter().map(|(name, val)| (*name, *val))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_normalizes_into_bound() {
        let test_data = vec![
            (0, 0),
            (5, 5),
            (9999, 9999),
            (10000, 0),
            (12345, 2345),
            (-1, 9999),
            (-3, 9997),
            (-10000, 0),
            (-20001, 9999),
        ];

        let mut env = Environment::new();
        test_data.into_iter().for_each(|(raw, stored)| {
            assert_eq!(env.set('a', raw), stored, "raw value {}", raw);
            assert_eq!(env.get('a'), Some(stored));
        });
    }

    #[test]
    fn clear_discards_bindings() {
        let mut env = Environment::new();
        env.set('a', 1);
        env.set('b', 2);
        assert_eq!(env.len(), 2);

        env.clear();

        assert!(env.is_empty());
        assert_eq!(env.get('a'), None);
    }

    #[test]
    fn iter_in_name_order() {
        let mut env = Environment::new();
        env.set('z', 26);
        env.set('a', 1);
        env.set('m', 13);

        assert_eq!(
            env.iter().collect::<Vec<(char, i64)>>(),
            vec![('a', 1), ('m', 13), ('z', 26)]
        );
    }
}
