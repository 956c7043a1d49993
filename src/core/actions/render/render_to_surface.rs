use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::actions::render::ports::display_surface::DisplaySurface;
use crate::core::actions::render::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::sample_grid::SampleGrid;

/// Draws one sample per `block_size` block straight onto `surface`.
///
/// Runs entirely on the calling thread. Does not present; the caller decides
/// when the frame is complete.
pub fn render_to_surface<Alg, CMap, S>(
    algorithm: &Alg,
    colour_map: &CMap,
    block_size: u32,
    surface: &mut S,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    S: DisplaySurface + ?Sized,
{
    let (width, height) = surface.size();
    let grid = SampleGrid::new(width, height, block_size);

    for block in grid.blocks() {
        let colour = colour_map.map(algorithm.compute(block.top_left()));
        surface.fill_rect(block, colour);
    }
}
