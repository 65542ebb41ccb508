use crate::error::ChartResult;
use crate::render::{Primitive, Renderer, Scene};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates scene content so invalid geometry is caught without a
/// real drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub scenes_rendered: usize,
    pub last_path_count: usize,
    pub last_arc_count: usize,
    pub last_rect_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;

        let (mut paths, mut arcs, mut rects, mut labels) = (0, 0, 0, 0);
        for primitive in &scene.primitives {
            match primitive {
                Primitive::Path(_) => paths += 1,
                Primitive::Arc(_) => arcs += 1,
                Primitive::Rect(_) => rects += 1,
                Primitive::Label(_) => labels += 1,
            }
        }

        self.scenes_rendered += 1;
        self.last_path_count = paths;
        self.last_arc_count = arcs;
        self.last_rect_count = rects;
        self.last_label_count = labels;
        Ok(())
    }
}
