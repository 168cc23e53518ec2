use crate::domain::ports::PassTarget;
use crate::utils::error::Result;

/// Holds the last written markup, like the `pass-info` element would.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    contents: String,
    writes: usize,
}

impl MemoryTarget {
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PassTarget for MemoryTarget {
    fn replace_contents(&mut self, markup: &str) -> Result<()> {
        self.contents = markup.to_string();
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_target_replaces_prior_contents() {
        let mut target = MemoryTarget::default();
        target.replace_contents("first").unwrap();
        target.replace_contents("second").unwrap();

        assert_eq!(target.contents(), "second");
        assert_eq!(target.writes(), 2);
        assert_eq!(target.element_id(), "pass-info");
    }
}
