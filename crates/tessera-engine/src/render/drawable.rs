use super::backend::{Backend, DrawContext};

/// A shape that can submit itself to a draw context of backend `B`.
///
/// Implemented independently by each concrete shape; callers can mix shapes
/// behind `&dyn Drawable<B>`.
pub trait Drawable<B: Backend> {
    /// Submits the shape once. Expected once per frame per visible instance.
    fn draw(&self, ctx: &mut dyn DrawContext<Backend = B>);
}
