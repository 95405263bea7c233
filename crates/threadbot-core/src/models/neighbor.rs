use super::ThreadRecord;

/// The closest candidate found by a nearest-neighbor search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    /// The winning thread.
    pub record: &'a ThreadRecord,
    /// Position of the winner in the candidate sequence.
    pub index: usize,
    /// Distance between the query and the winner. No relevance floor is
    /// applied; callers that need one compare against this value.
    pub distance: f64,
}
