/// Alias to a scalar floating type.
///
/// NOTE: objective values are kept as `f64`: switching to `f32` loses too much precision for
/// hypervolume accumulation on badly scaled objectives.
pub type Float = f64;
