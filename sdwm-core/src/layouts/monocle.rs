use crate::models::Xyhw;

/// Every window covers the whole work area.
pub fn update(work: &Xyhw, count: usize) -> Vec<Xyhw> {
    vec![*work; count]
}
