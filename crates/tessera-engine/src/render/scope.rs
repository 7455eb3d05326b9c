use std::ops::{Deref, DerefMut};

use super::backend::{Backend, DrawContext, VertexAttribute};

/// Keeps a set of vertex attributes enabled on a draw context for its lifetime.
///
/// Attributes are enabled in slice order on acquisition and disabled in
/// reverse order on drop, so every exit path (early return, unwinding)
/// leaves the context with the enable state it had before.
///
/// The scope derefs to the context it borrows; draw calls go through it.
pub struct AttributeScope<'c, 'a, B: Backend> {
    ctx: &'c mut dyn DrawContext<Backend = B>,
    attributes: &'a [VertexAttribute],
}

impl<'c, 'a, B: Backend> AttributeScope<'c, 'a, B> {
    pub fn enable(
        ctx: &'c mut dyn DrawContext<Backend = B>,
        attributes: &'a [VertexAttribute],
    ) -> Self {
        for &attribute in attributes {
            ctx.enable_attribute(attribute);
        }
        Self { ctx, attributes }
    }

    #[inline]
    pub fn attributes(&self) -> &[VertexAttribute] {
        self.attributes
    }
}

impl<'c, B: Backend> Deref for AttributeScope<'c, '_, B> {
    type Target = dyn DrawContext<Backend = B> + 'c;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<B: Backend> DerefMut for AttributeScope<'_, '_, B> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl<B: Backend> Drop for AttributeScope<'_, '_, B> {
    fn drop(&mut self) {
        for &attribute in self.attributes.iter().rev() {
            self.ctx.disable_attribute(attribute);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::render::host::{CommandRecorder, DrawCommand, HostBackend};

    const BOTH: [VertexAttribute; 2] = [VertexAttribute::Color, VertexAttribute::Position];

    #[test]
    fn enables_in_order_and_releases_in_reverse() {
        let mut rec = CommandRecorder::new();
        {
            let scope = AttributeScope::<HostBackend>::enable(&mut rec, &BOTH);
            assert_eq!(scope.attributes(), &BOTH);
        }
        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::Enable(VertexAttribute::Color),
                DrawCommand::Enable(VertexAttribute::Position),
                DrawCommand::Disable(VertexAttribute::Position),
                DrawCommand::Disable(VertexAttribute::Color),
            ]
        );
        assert!(rec.enabled_attributes().is_empty());
    }

    #[test]
    fn context_is_reachable_through_scope() {
        let mut rec = CommandRecorder::new();
        let mut scope = AttributeScope::<HostBackend>::enable(&mut rec, &BOTH);
        scope.disable_attribute(VertexAttribute::Color);
        scope.enable_attribute(VertexAttribute::Color);
        drop(scope);
        assert_eq!(rec.commands().len(), 6);
        assert!(rec.enabled_attributes().is_empty());
    }

    #[test]
    fn early_return_releases() {
        fn bail(ctx: &mut CommandRecorder) -> Option<()> {
            let _scope = AttributeScope::<HostBackend>::enable(ctx, &BOTH);
            let missing: Option<()> = None;
            missing?;
            Some(())
        }

        let mut rec = CommandRecorder::new();
        assert!(bail(&mut rec).is_none());
        assert!(rec.enabled_attributes().is_empty());
    }

    #[test]
    fn unwinding_releases() {
        let mut rec = CommandRecorder::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _scope = AttributeScope::<HostBackend>::enable(&mut rec, &BOTH);
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert!(rec.enabled_attributes().is_empty());
        assert_eq!(rec.commands().len(), 4);
    }
}
