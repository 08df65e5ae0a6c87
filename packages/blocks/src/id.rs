use crc32fast::Hasher;

/// Derive the stable id seed for a page from its external identifier using CRC32
pub fn page_seed(page_id: &str) -> String {
    let mut buff = String::from(page_id);
    if !page_id.starts_with("page://") {
        buff = format!("page://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential block id generator scoped to one page
///
/// Ids have the shape `{seed}-{n}` where the seed is the CRC32 of the page
/// identifier and `n` only ever counts up, so an id is never handed out twice
/// for the same page - not even after blocks are removed or undone away.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Page id (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(page_id: &str) -> Self {
        Self {
            seed: page_seed(page_id),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Continue counting past the ids already present in a stored page.
    ///
    /// Only ids minted under this page's seed advance the counter; ids from
    /// other seeds cannot collide with ours and are ignored.
    pub fn resume<'a>(page_id: &str, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let seed = page_seed(page_id);
        let prefix = format!("{}-", seed);

        let mut count = 0;
        for id in existing {
            if let Some(n) = id
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.parse::<u32>().ok())
            {
                count = count.max(n);
            }
        }

        Self { seed, count }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get the page id seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_seed_is_stable() {
        let id1 = page_seed("landing-home");
        let id2 = page_seed("landing-home");

        // Same page always generates same seed
        assert_eq!(id1, id2);

        // Different pages generate different seeds
        let id3 = page_seed("landing-umrah");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("landing-home");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        // Ids are sequential
        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        // All share same seed
        let seed = gen.seed();
        assert!(id1.starts_with(seed));
        assert!(id2.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_resume_skips_past_stored_ids() {
        let mut gen = IdGenerator::new("landing-home");
        let a = gen.new_id();
        let b = gen.new_id();

        let mut resumed = IdGenerator::resume("landing-home", [a.as_str(), b.as_str()]);
        let c = resumed.new_id();

        assert_ne!(c, a);
        assert_ne!(c, b);
        assert!(c.ends_with("-3"));
    }

    #[test]
    fn test_resume_ignores_foreign_seeds() {
        let resumed = IdGenerator::resume("landing-home", ["deadbeef-99"]);
        // Foreign ids never advance our counter
        assert_eq!(resumed.count, 0);
    }
}
