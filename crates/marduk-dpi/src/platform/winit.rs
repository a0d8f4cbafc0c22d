use winit::window::Window;

use crate::coords::Matrix;
use crate::dpi::{DpiScale, DpiVisual, DpiWindow};

// A live winit window is always presented, so there is no detached state:
// the surface transform is the window's OS scale factor on both axes.
impl DpiVisual for Window {
    fn render_transform(&self) -> Option<Matrix> {
        let scale = self.scale_factor();
        Some(Matrix::from_scale(scale, scale))
    }

    fn dpi_scale(&self) -> DpiScale {
        DpiScale::uniform(self.scale_factor())
    }
}

impl DpiWindow for Window {
    fn root_visual(&self) -> &dyn DpiVisual {
        self
    }
}
