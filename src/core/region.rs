/// A genomic interval identifying the sequence to retrieve.
///
/// Coordinates are 1-based and inclusive, following the Ensembl REST
/// convention. `start <= end` is expected but not enforced here; the remote
/// service rejects out-of-order coordinates itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
}

impl Region {
    pub fn new(chromosome: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}
