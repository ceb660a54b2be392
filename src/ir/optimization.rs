use super::Pattern;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Optimization {
    split_vendor: bool,
    vendor: Pattern,
    deterministic_ids: bool,
    compression: Compression,
}

impl Optimization {
    pub fn new(
        split_vendor: bool,
        vendor: Pattern,
        deterministic_ids: bool,
        compression: Compression,
    ) -> Self {
        Self {
            split_vendor,
            vendor,
            deterministic_ids,
            compression,
        }
    }

    pub fn split_vendor(&self) -> bool {
        self.split_vendor
    }

    pub fn vendor(&self) -> &Pattern {
        &self.vendor
    }

    pub fn deterministic_ids(&self) -> bool {
        self.deterministic_ids
    }

    pub fn compression(&self) -> &Compression {
        &self.compression
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compression {
    test: Pattern,
    threshold: u64,
}

impl Compression {
    pub fn new(test: Pattern, threshold: u64) -> Self {
        Self { test, threshold }
    }

    pub fn test(&self) -> &Pattern {
        &self.test
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }
}
