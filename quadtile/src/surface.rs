/// Lifecycle callbacks driven by the windowed host.
///
/// `surface_created` runs once with a current GL context, before any other
/// callback. `surface_changed` reports the drawable size in pixels and may
/// arrive any number of times. `draw_frame` is called once per presented
/// frame. All calls happen on the thread owning the context.
pub trait SurfaceRenderer {
    fn surface_created(&mut self);

    fn surface_changed(&mut self, width: u32, height: u32);

    fn draw_frame(&mut self);
}
