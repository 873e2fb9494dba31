use serde::{Deserialize, Serialize};

/// 无返回值（void）命令的结果类型
///
/// 所有实例彼此相等，比较恒为 `Equal`，哈希为常量；
/// 使“无结果”与“有结果”的命令共用同一条分发路径。
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Unit;

impl Unit {
    pub const DEFAULT: Unit = Unit;
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(u: Unit) -> u64 {
        let mut h = DefaultHasher::new();
        u.hash(&mut h);
        h.finish()
    }

    #[test]
    fn all_instances_are_equal() {
        let a = Unit;
        let b = Unit::default();
        let c: Unit = ().into();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, Unit::DEFAULT);
        assert_eq!(a.cmp(&c), Ordering::Equal);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
    }

    #[test]
    fn hash_is_constant() {
        assert_eq!(hash_of(Unit), hash_of(Unit::default()));
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Unit).unwrap();
        assert_eq!(json, "null");
        let back: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Unit::DEFAULT);
    }
}
