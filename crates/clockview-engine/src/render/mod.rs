//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::{CircleRenderer, HandRenderer, LayerRange};

use crate::scene::DrawList;

/// Full-scene renderer for the clock's draw stream.
///
/// Each shape renderer records its own render pass, so a single pass cannot
/// interleave shape types by z. The clock needs circles both under the hands
/// (face) and above them (center dot, outer ring); the circle pipeline
/// therefore runs twice, banded around the hand layers. Two `CircleRenderer`
/// instances are required because both bands upload instances before either
/// pass executes — sharing one buffer would clobber the base band.
pub struct SceneRenderer {
    hand_band: LayerRange,
    base_circles: CircleRenderer,
    hands: HandRenderer,
    overlay_circles: CircleRenderer,
}

impl SceneRenderer {
    /// `hand_band` is the z-range occupied by hand commands; circles below it
    /// render first, circles above it render last.
    pub fn new(hand_band: LayerRange) -> Self {
        Self {
            hand_band,
            base_circles: CircleRenderer::new(),
            hands: HandRenderer::new(),
            overlay_circles: CircleRenderer::new(),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.base_circles
            .render(ctx, target, draw_list, LayerRange::below(self.hand_band));
        self.hands.render(ctx, target, draw_list, self.hand_band);
        self.overlay_circles
            .render(ctx, target, draw_list, LayerRange::above(self.hand_band));
    }
}
