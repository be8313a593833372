use crate::domain::GradientDomain;
use crate::gradient::ValueSynthesizer;
use crate::image::ImageViewMut;
use crate::region::Mask;

/// Write synthesized values into every domain pixel that is a mask member.
///
/// Non-members inside the domain (e.g. the corners around a disc) are left
/// as they were. Returns the number of pixels written.
pub fn write_gradient<I>(
    image: &mut I,
    mask: &Mask,
    domain: &GradientDomain,
    synth: &ValueSynthesizer,
) -> usize
where
    I: ImageViewMut<Pixel = u8>,
{
    let mut written = 0usize;
    for y in domain.top..=domain.bottom() {
        let row = image.row_mut(y);
        for x in domain.left..=domain.right() {
            if !mask.contains(x, y) {
                continue;
            }
            row[x] = synth.value(x, y);
            written += 1;
        }
    }
    written
}
