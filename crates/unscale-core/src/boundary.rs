/// Per-axis record of where source pixels begin in a scaled image.
///
/// `is_marked(i)` is true when scaled column (or row) `i` starts a new
/// source pixel. Index 0 is always marked, and marks are never cleared:
/// evidence only accumulates across rows, frames and images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boundaries {
    marks: Vec<bool>,
}

impl Boundaries {
    /// Allocate a boundary array for an axis of `len` scaled pixels, with
    /// only the first position marked.
    pub fn new(len: usize) -> Self {
        let mut marks = vec![false; len];
        if let Some(first) = marks.first_mut() {
            *first = true;
        }
        Self { marks }
    }

    /// Build from explicit marks. Index 0 is forced on.
    pub fn from_marks(marks: &[bool]) -> Self {
        let mut marks = marks.to_vec();
        if let Some(first) = marks.first_mut() {
            *first = true;
        }
        Self { marks }
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marks[index]
    }

    pub fn mark(&mut self, index: usize) {
        self.marks[index] = true;
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.marks
    }

    /// Number of marked positions.
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    /// Lengths of the runs between consecutive marks, the last one ending at
    /// the array's end.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            marks: &self.marks,
            start: 0,
        }
    }
}

/// Iterator over run lengths, see [`Boundaries::runs`].
pub struct Runs<'a> {
    marks: &'a [bool],
    start: usize,
}

impl Iterator for Runs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.start >= self.marks.len() {
            return None;
        }
        let end = self.marks[self.start + 1..]
            .iter()
            .position(|&m| m)
            .map_or(self.marks.len(), |offset| self.start + 1 + offset);
        let length = end - self.start;
        self.start = end;
        Some(length)
    }
}
