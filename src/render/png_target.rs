use super::image::*;

use std::io::{BufWriter, Write};

impl Image {
    ///
    /// Encodes this image as an 8-bit RGB PNG and writes it to a stream
    ///
    /// The depth buffer is not part of the output; only the pixel colors are quantized and
    /// written, top row first.
    ///
    pub fn write_png<TStream>(&self, target: TStream) -> Result<(), png::EncodingError>
    where
        TStream: Write,
    {
        let target      = BufWriter::new(target);
        let mut encoder = png::Encoder::new(target, self.width() as u32, self.height() as u32);

        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer  = encoder.write_header()?;
        let mut data    = Vec::with_capacity(self.width() * self.height() * 3);

        for pixel in self.pixels().iter() {
            data.extend_from_slice(&pixel.to_rgb8());
        }

        writer.write_image_data(&data)?;
        Ok(())
    }
}
