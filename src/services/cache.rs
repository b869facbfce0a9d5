use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Thread-safe TTL cache keyed by upper-cased symbol.
pub struct Cache<V> {
    data: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

fn cache_key(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

impl<V: Clone> Cache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            data: DashMap::new(),
            ttl,
        }
    }

    /// Fresh value for `symbol`, evicting it if it has expired.
    pub fn get(&self, symbol: &str) -> Option<V> {
        let key = cache_key(symbol);
        let entry = self.data.get(&key)?;
        if entry.expires_at > Instant::now() {
            Some(entry.value.clone())
        } else {
            drop(entry);
            self.data.remove(&key);
            None
        }
    }

    pub fn insert(&self, symbol: &str, value: V) {
        // A zero TTL disables caching.
        if self.ttl.is_zero() {
            return;
        }
        self.data.insert(
            cache_key(symbol),
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Drop every expired entry.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.data.retain(|_, entry| entry.expires_at > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_keys_are_case_insensitive() {
        let cache: Cache<u32> = Cache::new(Duration::from_secs(60));
        cache.insert("reliance.ns", 7);
        assert_eq!(cache.get("RELIANCE.NS"), Some(7));
        assert_eq!(cache.get(" Reliance.NS "), Some(7));
        assert_eq!(cache.get("TCS.NS"), None);
    }

    #[test]
    fn test_expiry() {
        let cache: Cache<u32> = Cache::new(Duration::from_millis(10));
        cache.insert("AAPL", 1);
        assert_eq!(cache.get("AAPL"), Some(1));
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.get("AAPL"), None);
        assert!(cache.data.is_empty());
    }

    #[test]
    fn test_zero_ttl_disables_caching() {
        let cache: Cache<u32> = Cache::new(Duration::ZERO);
        cache.insert("AAPL", 1);
        assert_eq!(cache.get("AAPL"), None);
        assert!(cache.data.is_empty());
    }

    #[test]
    fn test_purge_drops_expired_entries() {
        let cache: Cache<u32> = Cache::new(Duration::from_millis(10));
        cache.insert("A", 1);
        cache.insert("B", 2);
        assert_eq!(cache.data.len(), 2);
        std::thread::sleep(Duration::from_millis(20));
        cache.purge_expired();
        assert!(cache.data.is_empty());
    }
}
