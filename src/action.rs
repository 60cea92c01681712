use crate::engine::SortCriterion;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Sort(SortCriterion),
    SelectUp,
    SelectDown,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    SelectFirst,
    SelectLast,
    None,
}
