#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Animating,
    Complete,
}

pub enum TextSource {
    Quotes(Vec<String>),
    Fixed(String),
}
