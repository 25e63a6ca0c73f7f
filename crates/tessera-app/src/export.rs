//! PNG previews of chunk color buffers.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tessera_terrain::{ColorBuffer, DrawMode, RegionTable};
use tessera_world::TerrainChunk;

use crate::error::AppError;

/// Write `buffer` as an 8-bit RGBA PNG.
pub fn write_png(path: &Path, buffer: &ColorBuffer) -> Result<(), AppError> {
    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(writer, buffer.width() as u32, buffer.height() as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&buffer.to_rgba8())?;
    Ok(())
}

/// File name of a chunk's preview, e.g. `chunk_-1_2.png`.
pub fn preview_file_name(chunk: &TerrainChunk) -> String {
    format!("chunk_{}_{}.png", chunk.coord.x, chunk.coord.y)
}

/// Write one preview per chunk into `dir`, returning the written paths.
pub fn write_previews(
    dir: &Path,
    chunks: &[TerrainChunk],
    regions: &RegionTable,
    mode: DrawMode,
) -> Result<Vec<PathBuf>, AppError> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let path = dir.join(preview_file_name(chunk));
        match mode {
            DrawMode::ColorMap => write_png(&path, &chunk.colors)?,
            DrawMode::HeightMap => write_png(&path, &mode.render(&chunk.heights, regions))?,
        }
        tracing::debug!(path = %path.display(), "wrote chunk preview");
        written.push(path);
    }
    Ok(written)
}
