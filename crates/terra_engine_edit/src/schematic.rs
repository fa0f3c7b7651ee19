//! Binary persistence for clipboards.
//!
//! Layout, all integers little endian:
//!
//! ```text
//! "TSCH"  u16 version  i32 width  i32 height  u32 body length  body
//! ```
//!
//! The body is zstd compressed. It holds one presence byte per cell in row
//! order, each followed by a packed tile when set, then a `u32` entity count
//! and the entities.

use std::io::{Cursor, ErrorKind, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use terra_engine::{Extent, Item, LiquidKind, Slope, Tile, TileEntity, TileFlags, Vector};

use crate::{Clipboard, EditError, Result};

pub const MAGIC: &[u8; 4] = b"TSCH";
pub const VERSION: u16 = 1;

const COMPRESSION_LEVEL: i32 = 3;
const MAX_CELLS: i64 = 1 << 24;
const MAX_BODY_SIZE: usize = 512 * 1024 * 1024;

mod entity_tag {
    pub const SIGN: u8 = 0;
    pub const CHEST: u8 = 1;
    pub const ITEM_FRAME: u8 = 2;
}

pub fn write(clipboard: &Clipboard, output: &mut impl Write) -> Result<()> {
    let mut body = Vec::new();
    for y in 0..clipboard.height() {
        for x in 0..clipboard.width() {
            match clipboard.cell(Vector::new(x, y)) {
                Some(tile) => {
                    body.write_u8(1)?;
                    write_tile(&mut body, &tile)?;
                }
                None => body.write_u8(0)?,
            }
        }
    }
    let entities = clipboard.tile_entities();
    body.write_u32::<LittleEndian>(len_u32(entities.len())?)?;
    for entity in entities {
        write_entity(&mut body, entity)?;
    }

    let compressed = zstd::stream::encode_all(Cursor::new(body), COMPRESSION_LEVEL)?;

    output.write_all(MAGIC)?;
    output.write_u16::<LittleEndian>(VERSION)?;
    output.write_i32::<LittleEndian>(clipboard.width())?;
    output.write_i32::<LittleEndian>(clipboard.height())?;
    output.write_u32::<LittleEndian>(len_u32(compressed.len())?)?;
    output.write_all(&compressed)?;
    log::debug!("wrote {}x{} schematic ({} bytes compressed)", clipboard.width(), clipboard.height(), compressed.len());
    Ok(())
}

pub fn read(input: &mut impl Read) -> Result<Clipboard> {
    let mut magic = [0u8; 4];
    input.read_exact(&mut magic).map_err(truncated)?;
    if &magic != MAGIC {
        return Err(EditError::invalid_schematic("bad magic"));
    }
    let version = input.read_u16::<LittleEndian>().map_err(truncated)?;
    if version != VERSION {
        return Err(EditError::UnsupportedSchematicVersion { version });
    }
    let width = input.read_i32::<LittleEndian>().map_err(truncated)?;
    let height = input.read_i32::<LittleEndian>().map_err(truncated)?;
    if width <= 0 || height <= 0 || i64::from(width) * i64::from(height) > MAX_CELLS {
        return Err(EditError::invalid_schematic(format!("bad dimensions {width}x{height}")));
    }
    let length = input.read_u32::<LittleEndian>().map_err(truncated)? as usize;
    let mut compressed = Vec::new();
    input.take(length as u64).read_to_end(&mut compressed)?;
    if compressed.len() != length {
        return Err(EditError::invalid_schematic("unexpected end of data"));
    }

    let body = decompress(&compressed)?;
    let mut cursor = Cursor::new(body.as_slice());
    let mut clipboard = Clipboard::new(Vector::new(width, height))?;
    for y in 0..height {
        for x in 0..width {
            match cursor.read_u8().map_err(truncated)? {
                0 => {}
                1 => {
                    clipboard.set_tile(Vector::new(x, y), read_tile(&mut cursor)?);
                }
                other => return Err(EditError::invalid_schematic(format!("bad presence byte {other}"))),
            }
        }
    }
    let count = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
    for _ in 0..count {
        let entity = read_entity(&mut cursor)?;
        let description = entity.to_string();
        if !clipboard.add_tile_entity(entity) {
            return Err(EditError::invalid_schematic(format!("misplaced {description}")));
        }
    }
    if (cursor.position() as usize) < body.len() {
        return Err(EditError::invalid_schematic("trailing data after entities"));
    }
    Ok(clipboard)
}

fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = zstd::stream::read::Decoder::new(Cursor::new(bytes))?;
    let mut out = Vec::new();
    let mut buf = [0u8; 8 * 1024];
    loop {
        let read = decoder.read(&mut buf).map_err(|e| EditError::invalid_schematic(format!("corrupt body: {e}")))?;
        if read == 0 {
            break;
        }
        if out.len().saturating_add(read) > MAX_BODY_SIZE {
            return Err(EditError::invalid_schematic("body too large"));
        }
        out.extend_from_slice(&buf[..read]);
    }
    Ok(out)
}

fn truncated(err: std::io::Error) -> EditError {
    if err.kind() == ErrorKind::UnexpectedEof {
        EditError::invalid_schematic("unexpected end of data")
    } else {
        err.into()
    }
}

fn len_u32(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| EditError::invalid_schematic(format!("length {len} does not fit")))
}

fn write_tile(out: &mut Vec<u8>, tile: &Tile) -> Result<()> {
    out.write_u16::<LittleEndian>(tile.block)?;
    out.write_u16::<LittleEndian>(tile.wall)?;
    out.write_u8(tile.liquid)?;
    out.write_u8(tile.liquid_kind.to_u8())?;
    out.write_u8(tile.block_color)?;
    out.write_u8(tile.wall_color)?;
    out.write_i16::<LittleEndian>(tile.frame_x)?;
    out.write_i16::<LittleEndian>(tile.frame_y)?;
    out.write_u8(tile.slope.to_u8())?;
    out.write_u16::<LittleEndian>(tile.flags.bits())?;
    Ok(())
}

fn read_tile(cursor: &mut Cursor<&[u8]>) -> Result<Tile> {
    let block = cursor.read_u16::<LittleEndian>().map_err(truncated)?;
    let wall = cursor.read_u16::<LittleEndian>().map_err(truncated)?;
    let liquid = cursor.read_u8().map_err(truncated)?;
    let kind = cursor.read_u8().map_err(truncated)?;
    let liquid_kind = LiquidKind::from_u8(kind).ok_or_else(|| EditError::invalid_schematic(format!("unknown liquid kind {kind}")))?;
    let block_color = cursor.read_u8().map_err(truncated)?;
    let wall_color = cursor.read_u8().map_err(truncated)?;
    let frame_x = cursor.read_i16::<LittleEndian>().map_err(truncated)?;
    let frame_y = cursor.read_i16::<LittleEndian>().map_err(truncated)?;
    let slope = cursor.read_u8().map_err(truncated)?;
    let slope = Slope::from_u8(slope).ok_or_else(|| EditError::invalid_schematic(format!("unknown slope {slope}")))?;
    let bits = cursor.read_u16::<LittleEndian>().map_err(truncated)?;
    let flags = TileFlags::from_bits(bits).ok_or_else(|| EditError::invalid_schematic(format!("unknown tile flags {bits:#06x}")))?;
    Ok(Tile {
        block,
        wall,
        liquid,
        liquid_kind,
        block_color,
        wall_color,
        frame_x,
        frame_y,
        slope,
        flags,
    })
}

fn write_entity(out: &mut Vec<u8>, entity: &TileEntity) -> Result<()> {
    let tag = match entity {
        TileEntity::Sign { .. } => entity_tag::SIGN,
        TileEntity::Chest { .. } => entity_tag::CHEST,
        TileEntity::ItemFrame { .. } => entity_tag::ITEM_FRAME,
    };
    out.write_u8(tag)?;
    let position = entity.position();
    out.write_i32::<LittleEndian>(position.x)?;
    out.write_i32::<LittleEndian>(position.y)?;
    match entity {
        TileEntity::Sign { text, .. } => write_string(out, text)?,
        TileEntity::Chest { name, items, .. } => {
            write_string(out, name)?;
            out.write_u32::<LittleEndian>(len_u32(items.len())?)?;
            for item in items {
                write_item(out, item)?;
            }
        }
        TileEntity::ItemFrame { item, .. } => write_item(out, item)?,
    }
    Ok(())
}

fn read_entity(cursor: &mut Cursor<&[u8]>) -> Result<TileEntity> {
    let tag = cursor.read_u8().map_err(truncated)?;
    let x = cursor.read_i32::<LittleEndian>().map_err(truncated)?;
    let y = cursor.read_i32::<LittleEndian>().map_err(truncated)?;
    let position = Vector::new(x, y);
    match tag {
        entity_tag::SIGN => Ok(TileEntity::Sign {
            position,
            text: read_string(cursor)?,
        }),
        entity_tag::CHEST => {
            let name = read_string(cursor)?;
            let count = cursor.read_u32::<LittleEndian>().map_err(truncated)? as usize;
            if count > remaining(cursor) {
                return Err(EditError::invalid_schematic("unexpected end of data"));
            }
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(read_item(cursor)?);
            }
            Ok(TileEntity::Chest { position, name, items })
        }
        entity_tag::ITEM_FRAME => Ok(TileEntity::ItemFrame {
            position,
            item: read_item(cursor)?,
        }),
        other => Err(EditError::invalid_schematic(format!("unknown entity tag {other}"))),
    }
}

fn write_item(out: &mut Vec<u8>, item: &Item) -> Result<()> {
    out.write_i32::<LittleEndian>(item.id)?;
    out.write_i32::<LittleEndian>(item.stack)?;
    out.write_u8(item.prefix)?;
    Ok(())
}

fn read_item(cursor: &mut Cursor<&[u8]>) -> Result<Item> {
    let id = cursor.read_i32::<LittleEndian>().map_err(truncated)?;
    let stack = cursor.read_i32::<LittleEndian>().map_err(truncated)?;
    let prefix = cursor.read_u8().map_err(truncated)?;
    Ok(Item::new(id, stack, prefix))
}

fn write_string(out: &mut Vec<u8>, value: &str) -> Result<()> {
    out.write_u32::<LittleEndian>(len_u32(value.len())?)?;
    out.write_all(value.as_bytes())?;
    Ok(())
}

fn read_string(cursor: &mut Cursor<&[u8]>) -> Result<String> {
    let len = cursor.read_u32::<LittleEndian>().map_err(truncated)? as usize;
    if len > remaining(cursor) {
        return Err(EditError::invalid_schematic("unexpected end of data"));
    }
    let mut bytes = vec![0u8; len];
    cursor.read_exact(&mut bytes).map_err(truncated)?;
    String::from_utf8(bytes).map_err(|_| EditError::invalid_schematic("string is not valid UTF-8"))
}

fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    cursor.get_ref().len().saturating_sub(cursor.position() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let clipboard = Clipboard::new(Vector::new(3, 2)).unwrap();
        let mut bytes = Vec::new();
        write(&clipboard, &mut bytes).unwrap();
        assert_eq!(b"TSCH", &bytes[0..4]);
        assert_eq!(&[1, 0], &bytes[4..6]);
        assert_eq!(&[3, 0, 0, 0], &bytes[6..10]);
        assert_eq!(&[2, 0, 0, 0], &bytes[10..14]);
    }

    #[test]
    fn test_bad_magic() {
        let err = read(&mut Cursor::new(b"NOPE\x01\x00".to_vec())).unwrap_err();
        assert!(matches!(err, EditError::InvalidSchematic { .. }));
    }

    #[test]
    fn test_truncated_header() {
        let err = read(&mut Cursor::new(b"TS".to_vec())).unwrap_err();
        assert!(matches!(err, EditError::InvalidSchematic { .. }));
    }
}
