use crate::model::Post;
use crate::mvi::UiState;

/// Primary screen state: a tagged union with exactly one active variant.
///
/// Transitions are whole-value replacements; subscribers never observe
/// anything between `Loading` and the terminal variant of a load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostState {
    #[default]
    Loading,
    Loaded(Vec<Post>),
    Failed(String),
}

impl UiState for PostState {}

impl PostState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Alternate, flatter state shape for the same screen.
///
/// Carries loading and error as independent fields instead of variants.
/// A failed load keeps the previously loaded posts so the screen can
/// keep showing them alongside the error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostListState {
    pub is_loading: bool,
    pub posts: Vec<Post>,
    pub error: Option<String>,
}

impl UiState for PostListState {}
