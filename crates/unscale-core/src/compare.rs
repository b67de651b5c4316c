use crate::consts::RGB_CHANNELS;

/// Decides whether two adjacent RGB pixels differ enough to mark the start
/// of a new source pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Comparator {
    /// Any channel differing at all is a contrast.
    #[default]
    Exact,
    /// A channel must differ by more than `fuzziness` to count.
    Fuzzy { fuzziness: u8 },
}

impl Comparator {
    /// Compare two pixels.
    pub fn differs(&self, a: &[u8; RGB_CHANNELS], b: &[u8; RGB_CHANNELS]) -> bool {
        match *self {
            Self::Exact => a != b,
            Self::Fuzzy { fuzziness } => a
                .iter()
                .zip(b.iter())
                .any(|(&ca, &cb)| ca.abs_diff(cb) > fuzziness),
        }
    }

    /// Compare the pixels at the front of two read cursors and advance both
    /// cursors past them, whatever the verdict.
    ///
    /// Callers walking a row-major RGB buffer can chain calls without
    /// recomputing offsets. Both cursors must hold at least one pixel.
    pub fn compare_advance(&self, a: &mut &[u8], b: &mut &[u8]) -> bool {
        debug_assert!(a.len() >= RGB_CHANNELS && b.len() >= RGB_CHANNELS);
        let (cur_a, cur_b) = (*a, *b);
        let (Some((pa, rest_a)), Some((pb, rest_b))) = (
            cur_a.split_first_chunk::<RGB_CHANNELS>(),
            cur_b.split_first_chunk::<RGB_CHANNELS>(),
        ) else {
            return false;
        };
        *a = rest_a;
        *b = rest_b;
        self.differs(pa, pb)
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::Fuzzy { fuzziness } => write!(f, "Fuzzy (leeway {})", fuzziness),
        }
    }
}
